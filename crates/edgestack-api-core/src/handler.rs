//! Handler implementation bridging HTTP to business logic.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;

use edgestack_api_http::body::ApiResponseBody;
use edgestack_api_http::dispatch::{ApiHandler, RequestContext};
use edgestack_api_http::response::json_response;
use edgestack_api_http::router::ApiOperation;
use edgestack_api_model::ApiError;

use crate::provider::EdgeStackApi;

/// Handler that bridges the HTTP layer to the backend provider.
#[derive(Debug)]
pub struct EdgeStackApiHandler {
    provider: Arc<EdgeStackApi>,
}

impl EdgeStackApiHandler {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: Arc<EdgeStackApi>) -> Self {
        Self { provider }
    }
}

impl ApiHandler for EdgeStackApiHandler {
    fn handle_operation(
        &self,
        op: ApiOperation,
        ctx: RequestContext,
        body: Bytes,
    ) -> Pin<Box<dyn Future<Output = Result<http::Response<ApiResponseBody>, ApiError>> + Send>>
    {
        let provider = Arc::clone(&self.provider);
        Box::pin(async move { dispatch(provider.as_ref(), op, &ctx, &body) })
    }
}

/// Dispatch an operation to the appropriate provider method.
fn dispatch(
    provider: &EdgeStackApi,
    op: ApiOperation,
    ctx: &RequestContext,
    body: &[u8],
) -> Result<http::Response<ApiResponseBody>, ApiError> {
    match op {
        ApiOperation::GetProfile => serialize(&provider.handle_get_profile(&ctx.actor)?),
        ApiOperation::UpdateProfile => {
            serialize(&provider.handle_update_profile(&ctx.actor, body)?)
        }
        ApiOperation::PutItem { item_id } => {
            serialize(&provider.handle_put_item(&ctx.actor, &item_id, body)?)
        }
        ApiOperation::PostInteraction => {
            serialize(&provider.handle_post_interaction(&ctx.actor, body)?)
        }
        ApiOperation::ListInteractions => {
            serialize(&provider.handle_list_interactions(&ctx.actor, ctx.query.as_deref())?)
        }
    }
}

/// Serialize an output type into a JSON HTTP response.
fn serialize<T: serde::Serialize>(
    output: &T,
) -> Result<http::Response<ApiResponseBody>, ApiError> {
    let json = serde_json::to_vec(output)
        .map_err(|e| ApiError::internal_error(format!("Failed to serialize response: {e}")))?;
    Ok(json_response(json))
}
