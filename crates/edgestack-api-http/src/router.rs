//! Request router.
//!
//! The API surface is small enough for a direct `(method, path)` match; no
//! route table or pattern compilation is needed. The path seen here never
//! includes the query string.

use std::fmt;

use edgestack_api_model::ApiError;

/// The operations exposed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOperation {
    /// `GET /me` — read the caller's profile.
    GetProfile,
    /// `PUT /me` — whitelisted update of the caller's profile.
    UpdateProfile,
    /// `PUT /items/{itemId}` — whitelisted update of a catalog item.
    PutItem {
        /// The raw item id path segment.
        item_id: String,
    },
    /// `POST /interactions` — append one interaction.
    PostInteraction,
    /// `GET /interactions` — read the caller's recent interactions.
    ListInteractions,
}

impl ApiOperation {
    /// The operation name, for diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetProfile => "GetProfile",
            Self::UpdateProfile => "UpdateProfile",
            Self::PutItem { .. } => "PutItem",
            Self::PostInteraction => "PostInteraction",
            Self::ListInteractions => "ListInteractions",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve an API operation from the request method and path.
///
/// # Errors
///
/// Returns a 404 [`ApiError`] when no operation matches.
pub fn resolve_operation(method: &http::Method, path: &str) -> Result<ApiOperation, ApiError> {
    match path {
        "/me" if method == http::Method::GET => return Ok(ApiOperation::GetProfile),
        "/me" if method == http::Method::PUT => return Ok(ApiOperation::UpdateProfile),
        "/interactions" if method == http::Method::POST => {
            return Ok(ApiOperation::PostInteraction);
        }
        "/interactions" if method == http::Method::GET => {
            return Ok(ApiOperation::ListInteractions);
        }
        _ => {}
    }

    if method == http::Method::PUT {
        if let Some(item_id) = path.strip_prefix("/items/") {
            if !item_id.is_empty() && !item_id.contains('/') {
                return Ok(ApiOperation::PutItem {
                    item_id: item_id.to_owned(),
                });
            }
        }
    }

    Err(ApiError::not_found(format!(
        "no route matches {method} {path}"
    )))
}
