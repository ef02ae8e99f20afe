//! Profile read and update operations.

use serde_json::Value;

use edgestack_api_model::ApiError;
use edgestack_api_model::profile::{GuestProfile, PROFILE_READ_FIELDS, UpdateOutput};
use edgestack_core::Actor;

use crate::provider::EdgeStackApi;
use crate::storage::Record;
use crate::validate::validate_profile_update;

use super::{epoch_ms_string, parse_json_object};

impl EdgeStackApi {
    /// Read the caller's profile.
    ///
    /// Registered users get their record filtered to the read whitelist;
    /// guests have no row yet and get the stub shape.
    pub fn handle_get_profile(&self, actor: &str) -> Result<Value, ApiError> {
        match Actor::parse(actor) {
            Ok(Actor::User(user_id)) => {
                let record = self.state.users.get(&user_id).unwrap_or_default();
                let filtered: Record = PROFILE_READ_FIELDS
                    .iter()
                    .filter_map(|field| {
                        record
                            .get(*field)
                            .map(|value| ((*field).to_owned(), value.clone()))
                    })
                    .collect();
                Ok(Value::Object(filtered))
            }
            Ok(Actor::Guest(guest_id)) => serde_json::to_value(GuestProfile::new(guest_id))
                .map_err(|e| ApiError::internal_error(e.to_string())),
            Err(_) => Err(ApiError::bad_request("Invalid actor format")),
        }
    }

    /// Whitelisted update of the caller's profile. Guests cannot update.
    pub fn handle_update_profile(
        &self,
        actor: &str,
        body: &[u8],
    ) -> Result<UpdateOutput, ApiError> {
        let actor =
            Actor::parse(actor).map_err(|_| ApiError::bad_request("Invalid actor format"))?;
        let Some(user_id) = actor.as_user() else {
            return Err(ApiError::forbidden("Guests cannot update user profile"));
        };

        let body = parse_json_object(body)?;
        let (mut update, errors) = validate_profile_update(&body);
        if !errors.is_empty() {
            return Err(ApiError::validation_failed(errors));
        }
        if update.is_empty() {
            return Err(ApiError::bad_request("No valid fields to update"));
        }

        let updated: Vec<String> = update.keys().cloned().collect();
        update.insert("updatedAt".to_owned(), Value::String(epoch_ms_string()));
        self.state.users.merge(user_id, update);

        Ok(UpdateOutput { ok: true, updated })
    }
}
