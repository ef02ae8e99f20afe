//! API operation handlers, one module per handler group.

pub mod interaction;
pub mod item;
pub mod profile;

use edgestack_api_model::ApiError;

use crate::storage::Record;

/// Parse a request body as a JSON object, treating an empty body as `{}`.
pub(crate) fn parse_json_object(body: &[u8]) -> Result<Record, ApiError> {
    if body.is_empty() {
        return Ok(Record::new());
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| ApiError::bad_request("Request body must be valid JSON"))?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(ApiError::bad_request("Request body must be a JSON object")),
    }
}

/// Current wall-clock time as an epoch-milliseconds string, the format the
/// `updatedAt` attribute uses everywhere.
pub(crate) fn epoch_ms_string() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
