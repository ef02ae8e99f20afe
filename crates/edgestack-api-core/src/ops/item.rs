//! Item catalog write operation.

use serde_json::Value;

use edgestack_api_model::ApiError;
use edgestack_api_model::profile::UpdateOutput;
use edgestack_core::Actor;

use crate::provider::EdgeStackApi;
use crate::validate::{is_valid_item_id, validate_item_update};

use super::{epoch_ms_string, parse_json_object};

impl EdgeStackApi {
    /// Whitelisted create-or-update of a catalog item.
    ///
    /// Only registered users may write to the catalog; anything else is
    /// rejected before the payload is even parsed.
    pub fn handle_put_item(
        &self,
        actor: &str,
        item_id: &str,
        body: &[u8],
    ) -> Result<UpdateOutput, ApiError> {
        if !Actor::parse(actor).is_ok_and(|a| a.is_user()) {
            return Err(ApiError::forbidden(
                "Only users (admins) can create/update items",
            ));
        }

        if !is_valid_item_id(item_id) {
            return Err(ApiError::bad_request(
                "Missing or invalid itemId format (must be item:<uuid>)",
            ));
        }

        let body = parse_json_object(body)?;
        let (mut update, errors) = validate_item_update(&body);
        if !errors.is_empty() {
            return Err(ApiError::validation_failed(errors));
        }
        if update.is_empty() {
            return Err(ApiError::bad_request("No valid fields to update"));
        }

        let updated: Vec<String> = update.keys().cloned().collect();
        update.insert("updatedAt".to_owned(), Value::String(epoch_ms_string()));
        self.state.items.merge(item_id, update);

        Ok(UpdateOutput { ok: true, updated })
    }
}
