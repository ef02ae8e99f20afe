//! Interaction log operations.

use edgestack_api_model::interaction::{
    InteractionRecord, ListInteractionsOutput, PostInteractionInput, PostInteractionOutput,
};
use edgestack_api_model::{ApiError, EventType};
use edgestack_core::Actor;

use crate::provider::EdgeStackApi;

/// Default page size for interaction reads.
const DEFAULT_LIMIT: usize = 20;
/// Largest accepted page size; out-of-range requests fall back to the default.
const MAX_LIMIT: usize = 100;

impl EdgeStackApi {
    /// Append one interaction for the caller.
    pub fn handle_post_interaction(
        &self,
        actor: &str,
        body: &[u8],
    ) -> Result<PostInteractionOutput, ApiError> {
        let parsed = Actor::parse(actor)
            .map_err(|_| ApiError::bad_request("Invalid or missing actorId format"))?;

        let input: PostInteractionInput = if body.is_empty() {
            PostInteractionInput::default()
        } else {
            serde_json::from_slice(body)
                .map_err(|_| ApiError::bad_request("Request body must be valid JSON"))?
        };

        let Some(item_id) = input.item_id.filter(|id| !id.is_empty()) else {
            return Err(ApiError::bad_request("Missing itemId"));
        };
        if !self.state.items.contains(&item_id) {
            return Err(ApiError::bad_request("itemId does not exist"));
        }

        let event_name = input
            .event_type
            .unwrap_or_else(|| "VIEW".to_owned())
            .to_uppercase();
        let Some(event_type) = EventType::from_name(&event_name) else {
            return Err(ApiError::bad_request(format!(
                "Invalid eventType: {event_name}"
            )));
        };

        let metadata = match input.metadata {
            None => serde_json::json!({}),
            Some(value) if value.is_object() => value,
            Some(_) => return Err(ApiError::bad_request("metadata must be a JSON object")),
        };

        let weight = input.weight.unwrap_or_else(|| event_type.default_weight());

        let ts = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true);
        let record = InteractionRecord {
            actor_id: parsed.to_string(),
            sort_key: format!("{ts}#{item_id}"),
            item_id,
            event_type,
            weight,
            metadata,
            ts,
            user_id: parsed.as_user().map(ToOwned::to_owned),
            guest_id: match &parsed {
                Actor::Guest(id) => Some(id.clone()),
                Actor::User(_) => None,
            },
        };

        self.state.interactions.append(record.clone());

        Ok(PostInteractionOutput {
            ok: true,
            logged: record,
        })
    }

    /// Read the caller's most recent interactions, newest first.
    ///
    /// The event-type filter is applied after the limit, mirroring a
    /// paged-query-then-filter read: a filtered page can come back shorter
    /// than `limit` even when older matches exist.
    pub fn handle_list_interactions(
        &self,
        actor: &str,
        query: Option<&str>,
    ) -> Result<ListInteractionsOutput, ApiError> {
        let parsed = Actor::parse(actor)
            .map_err(|_| ApiError::unauthorized("Unauthorized or invalid actorId format"))?;

        let limit = parse_limit(query_param(query, "limit").as_deref());

        let filter = match query_param(query, "eventType") {
            None => None,
            Some(raw) => {
                let name = raw.to_uppercase();
                match EventType::from_name(&name) {
                    Some(event_type) => Some(event_type),
                    None => {
                        return Err(ApiError::bad_request(format!("Invalid eventType: {name}")));
                    }
                }
            }
        };

        let mut interactions = self.state.interactions.list_recent(&parsed.to_string(), limit);
        if let Some(event_type) = filter {
            interactions.retain(|record| record.event_type == event_type);
        }

        Ok(ListInteractionsOutput { interactions })
    }
}

/// Parse the `limit` query parameter, falling back to the default for
/// absent, unparseable, or out-of-range values.
fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.parse::<usize>().ok())
        .filter(|limit| (1..=MAX_LIMIT).contains(limit))
        .unwrap_or(DEFAULT_LIMIT)
}

/// Look up one query-string parameter by name.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
