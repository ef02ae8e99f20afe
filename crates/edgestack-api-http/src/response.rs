//! Response serialization and error formatting.

use edgestack_api_model::ApiError;

use crate::body::ApiResponseBody;

/// Content type for JSON responses.
pub const CONTENT_TYPE: &str = "application/json";

/// Header names a browser client is allowed to send cross-origin.
pub const ALLOWED_HEADERS: &str = "Content-Type,X-Signature,X-Timestamp,X-Actor";

/// Methods the API accepts cross-origin.
pub const ALLOWED_METHODS: &str = "GET,PUT,POST,OPTIONS";

/// Build a success response from JSON bytes.
#[must_use]
pub fn json_response(json: Vec<u8>) -> http::Response<ApiResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .body(ApiResponseBody::from_json(json))
        .expect("valid JSON response")
}

/// Convert an [`ApiError`] into a complete HTTP error response.
#[must_use]
pub fn error_to_response(error: &ApiError) -> http::Response<ApiResponseBody> {
    http::Response::builder()
        .status(error.status_code())
        .header("content-type", CONTENT_TYPE)
        .body(ApiResponseBody::from_json(error.to_json()))
        .expect("valid error response")
}

/// The response for an unauthorized request.
///
/// Deliberately carries no deny reason: a caller must not be able to
/// distinguish a forged signature from a stale timestamp. The reason code
/// lives only on the diagnostic channel.
#[must_use]
pub fn forbidden_response() -> http::Response<ApiResponseBody> {
    let json = serde_json::to_vec(&serde_json::json!({ "message": "Forbidden" }))
        .expect("JSON serialization of static body cannot fail");

    http::Response::builder()
        .status(http::StatusCode::FORBIDDEN)
        .header("content-type", CONTENT_TYPE)
        .body(ApiResponseBody::from_json(json))
        .expect("valid forbidden response")
}

/// The response for a CORS preflight request.
#[must_use]
pub fn preflight_response() -> http::Response<ApiResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::NO_CONTENT)
        .body(ApiResponseBody::empty())
        .expect("valid preflight response")
}
