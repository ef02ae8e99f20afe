//! Handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use edgestack_api_model::ApiError;

use crate::body::ApiResponseBody;
use crate::router::ApiOperation;

/// Per-request context assembled by the gateway pipeline.
///
/// The actor is the output of the request authenticator — handlers trust it
/// as a verified principal and only ever parse its format, never re-verify
/// it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The verified actor string (`user:<id>` or `guest:<id>` by contract,
    /// though format validation is each handler's own responsibility).
    pub actor: String,
    /// The raw query string, if any.
    pub query: Option<String>,
}

/// Trait that the business logic provider must implement.
///
/// The handler receives a resolved operation, the request context, and the
/// normalized body bytes, and returns a complete HTTP response. This trait
/// is the boundary between the HTTP transport layer and the business logic
/// layer.
pub trait ApiHandler: Send + Sync + 'static {
    /// Handle an API operation and produce an HTTP response.
    fn handle_operation(
        &self,
        op: ApiOperation,
        ctx: RequestContext,
        body: Bytes,
    ) -> Pin<Box<dyn Future<Output = Result<http::Response<ApiResponseBody>, ApiError>> + Send>>;
}

/// Dispatch an operation to the handler.
pub async fn dispatch_operation<H: ApiHandler>(
    handler: &H,
    op: ApiOperation,
    ctx: RequestContext,
    body: Bytes,
) -> Result<http::Response<ApiResponseBody>, ApiError> {
    tracing::debug!(operation = %op, actor = %ctx.actor, "dispatching operation");
    handler.handle_operation(op, ctx, body).await
}

/// Default handler that returns an error for all operations.
#[derive(Debug, Clone, Default)]
pub struct NotImplementedHandler;

impl ApiHandler for NotImplementedHandler {
    fn handle_operation(
        &self,
        op: ApiOperation,
        _ctx: RequestContext,
        _body: Bytes,
    ) -> Pin<Box<dyn Future<Output = Result<http::Response<ApiResponseBody>, ApiError>> + Send>>
    {
        Box::pin(async move {
            Err(ApiError::not_found(format!(
                "operation not implemented: {op}"
            )))
        })
    }
}
