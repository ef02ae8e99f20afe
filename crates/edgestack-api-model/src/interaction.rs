//! Interaction log types.

use crate::types::EventType;

/// One appended interaction, keyed by `(actorId, sortKey)` where the sort
/// key is `"{ts}#{itemId}"`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    /// The full actor string (`user:<id>` or `guest:<id>`).
    pub actor_id: String,
    /// Sort key: RFC 3339 timestamp, `#`, item id. Lexicographic order on
    /// this key is chronological order.
    pub sort_key: String,
    /// The item the interaction refers to.
    pub item_id: String,
    /// The event type.
    pub event_type: EventType,
    /// Event weight; defaults per event type when the caller omits it.
    pub weight: i64,
    /// Free-form metadata object supplied by the caller.
    pub metadata: serde_json::Value,
    /// RFC 3339 timestamp of the append.
    pub ts: String,
    /// The user id, when the actor is a registered user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// The guest id, when the actor is a guest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<String>,
}

/// Body of a `POST /interactions` request.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInteractionInput {
    /// The item being interacted with. Required; must exist in the catalog.
    pub item_id: Option<String>,
    /// Event type name; case-insensitive, defaults to `VIEW`.
    pub event_type: Option<String>,
    /// Optional metadata object.
    pub metadata: Option<serde_json::Value>,
    /// Optional explicit weight.
    pub weight: Option<i64>,
}

/// Response of a `POST /interactions` request.
#[derive(Debug, serde::Serialize)]
pub struct PostInteractionOutput {
    /// Always true on success.
    pub ok: bool,
    /// The record as appended.
    pub logged: InteractionRecord,
}

/// Response of a `GET /interactions` request, newest first.
#[derive(Debug, serde::Serialize)]
pub struct ListInteractionsOutput {
    /// The matching interactions.
    pub interactions: Vec<InteractionRecord>,
}
