//! The gateway HTTP service.
//!
//! Implements the hyper `Service` trait and the per-request pipeline:
//! health-check interception, body collection, authentication, routing,
//! and dispatch. Every request passes through the authenticator before any
//! routing happens; only the verified actor reaches the handlers.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;

use edgestack_api_model::ApiError;
use edgestack_auth::decision::AuthDecision;
use edgestack_auth::envelope::SignedRequest;
use edgestack_auth::verify::Authenticator;

use crate::body::ApiResponseBody;
use crate::dispatch::{ApiHandler, RequestContext, dispatch_operation};
use crate::response::{
    ALLOWED_HEADERS, ALLOWED_METHODS, CONTENT_TYPE, error_to_response, forbidden_response,
    json_response, preflight_response,
};
use crate::router::resolve_operation;

/// Configuration for the gateway HTTP service.
#[derive(Debug, Clone)]
pub struct ApiHttpConfig {
    /// Origin value for `Access-Control-Allow-Origin` response headers.
    pub allowed_origin: String,
}

impl Default for ApiHttpConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_owned(),
        }
    }
}

/// Hyper `Service` implementation for the EdgeStack API.
///
/// Wraps an [`ApiHandler`] implementation and an [`Authenticator`]; routes
/// verified requests to the appropriate operation handler.
#[derive(Debug)]
pub struct ApiHttpService<H: ApiHandler> {
    handler: Arc<H>,
    authenticator: Arc<Authenticator>,
    config: Arc<ApiHttpConfig>,
}

impl<H: ApiHandler> ApiHttpService<H> {
    /// Create a new `ApiHttpService`.
    pub fn new(handler: Arc<H>, authenticator: Authenticator, config: ApiHttpConfig) -> Self {
        Self {
            handler,
            authenticator: Arc::new(authenticator),
            config: Arc::new(config),
        }
    }
}

impl<H: ApiHandler> Clone for ApiHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            authenticator: Arc::clone(&self.authenticator),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H, B> hyper::service::Service<http::Request<B>> for ApiHttpService<H>
where
    H: ApiHandler,
    B: http_body::Body + Send + 'static,
    B::Data: Send,
    B::Error: std::fmt::Display,
{
    type Response = http::Response<ApiResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<B>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let authenticator = Arc::clone(&self.authenticator);
        let config = Arc::clone(&self.config);
        let request_id = uuid::Uuid::new_v4().to_string();

        Box::pin(async move {
            let response = process_request(req, handler.as_ref(), &authenticator).await;
            let response = add_common_headers(response, &config, &request_id);
            Ok(response)
        })
    }
}

/// Process a single request through the full pipeline.
async fn process_request<H, B>(
    req: http::Request<B>,
    handler: &H,
    authenticator: &Authenticator,
) -> http::Response<ApiResponseBody>
where
    H: ApiHandler,
    B: http_body::Body,
    B::Error: std::fmt::Display,
{
    // 1. Intercept health probes; they are unauthenticated by design.
    if is_health_check(req.method(), req.uri().path()) {
        return health_check_response();
    }

    let (parts, incoming) = req.into_parts();

    // 2. Collect body.
    let body = match collect_body(incoming).await {
        Ok(body) => body,
        Err(err) => return error_to_response(&err),
    };

    // 3. Authenticate. The handler body is resolved up front: transport
    // decoding degrades rather than fails, and never aborts a request that
    // would otherwise verify. This transport does not base64-encode bodies;
    // the envelope flag exists for fronting gateways that do.
    let signed = SignedRequest::from_parts(&parts, &body, false);
    let handler_body = signed.normalized_body();

    match authenticator.authenticate(&signed) {
        AuthDecision::AllowPreflight => preflight_response(),
        // The deny reason stays on the diagnostic channel (the authenticator
        // already logged it); the caller gets the opaque shape.
        decision @ AuthDecision::Deny { .. } => {
            tracing::debug!(
                authorizer = ?decision.to_authorizer_output(),
                "authorization denied"
            );
            forbidden_response()
        }
        AuthDecision::Allow { actor } => {
            // 4. Route and dispatch with the verified identity attached.
            let op = match resolve_operation(&parts.method, parts.uri.path()) {
                Ok(op) => op,
                Err(err) => return error_to_response(&err),
            };
            let ctx = RequestContext {
                actor,
                query: parts.uri.query().map(ToOwned::to_owned),
            };
            match dispatch_operation(handler, op, ctx, handler_body).await {
                Ok(response) => response,
                Err(err) => error_to_response(&err),
            }
        }
    }
}

/// Collect the incoming body into a single `Bytes` buffer.
async fn collect_body<B>(incoming: B) -> Result<Bytes, ApiError>
where
    B: http_body::Body,
    B::Error: std::fmt::Display,
{
    incoming
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| ApiError::internal_error(format!("Failed to read request body: {e}")))
}

/// Add common response headers to every response.
fn add_common_headers(
    mut response: http::Response<ApiResponseBody>,
    config: &ApiHttpConfig,
    request_id: &str,
) -> http::Response<ApiResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry("x-request-id").or_insert(hv);
    }

    headers
        .entry("content-type")
        .or_insert(http::HeaderValue::from_static(CONTENT_TYPE));

    headers.insert("server", http::HeaderValue::from_static("EdgeStack"));

    // CORS headers.
    if let Ok(hv) = http::HeaderValue::from_str(&config.allowed_origin) {
        headers.insert("access-control-allow-origin", hv);
    }
    headers.insert(
        "access-control-allow-headers",
        http::HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        "access-control-allow-methods",
        http::HeaderValue::from_static(ALLOWED_METHODS),
    );

    response
}

/// Check if the request is a health check probe.
fn is_health_check(method: &http::Method, path: &str) -> bool {
    *method == http::Method::GET && (path == "/health" || path == "/_health")
}

/// Produce the health check response.
fn health_check_response() -> http::Response<ApiResponseBody> {
    json_response(br#"{"status":"ok"}"#.to_vec())
}
