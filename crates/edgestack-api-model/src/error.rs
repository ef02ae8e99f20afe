//! API error types.
//!
//! Handler errors serialize to a stable JSON shape:
//!
//! ```json
//! {
//!   "error": "Validation failed",
//!   "details": { "email": "Must be a valid email address" }
//! }
//! ```
//!
//! The `details` map is present only for per-field validation failures.

use std::collections::BTreeMap;
use std::fmt;

/// Well-known API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ApiErrorCode {
    /// Malformed identity or payload.
    #[default]
    BadRequest,
    /// No usable identity on the request.
    Unauthorized,
    /// The identity type is not allowed to perform the operation.
    Forbidden,
    /// No route or resource matches the request.
    NotFound,
    /// Unexpected internal fault.
    InternalError,
}

impl ApiErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::InternalError => "InternalError",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            Self::BadRequest => http::StatusCode::BAD_REQUEST,
            Self::Unauthorized => http::StatusCode::UNAUTHORIZED,
            Self::Forbidden => http::StatusCode::FORBIDDEN,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API error response.
#[derive(Debug)]
pub struct ApiError {
    /// The error code.
    pub code: ApiErrorCode,
    /// A human-readable error message (the JSON `error` field).
    pub message: String,
    /// Per-field validation messages, if any.
    pub details: Option<BTreeMap<String, String>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new `ApiError` with a custom message.
    #[must_use]
    pub fn with_message(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// The HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        self.code.status_code()
    }

    // -- Convenience constructors --

    /// Malformed identity or payload.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::BadRequest, message)
    }

    /// No usable identity.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::Unauthorized, message)
    }

    /// Identity type not allowed for this operation.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::Forbidden, message)
    }

    /// No route or resource matches.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::NotFound, message)
    }

    /// Unexpected internal fault.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::InternalError, message)
    }

    /// Per-field validation failure carrying a `details` map.
    #[must_use]
    pub fn validation_failed(details: BTreeMap<String, String>) -> Self {
        Self {
            code: ApiErrorCode::BadRequest,
            message: "Validation failed".to_owned(),
            details: Some(details),
        }
    }

    /// Serialize this error to its JSON body.
    #[must_use]
    pub fn to_json(&self) -> Vec<u8> {
        let body = match &self.details {
            Some(details) => serde_json::json!({
                "error": self.message,
                "details": details,
            }),
            None => serde_json::json!({ "error": self.message }),
        };
        serde_json::to_vec(&body).expect("JSON serialization of error cannot fail")
    }
}
