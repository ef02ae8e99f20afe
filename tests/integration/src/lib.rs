//! Integration tests for the EdgeStack gateway.
//!
//! These tests drive the full pipeline — authentication, routing, handlers,
//! stores — through the hyper `Service` boundary, without opening a socket.
#![allow(missing_docs)]

use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::service::Service;

use edgestack_api_core::{EdgeStackApi, EdgeStackApiHandler};
use edgestack_api_http::{ApiHttpConfig, ApiHttpService};
use edgestack_auth::canonical::build_canonical_string;
use edgestack_auth::verify::compute_signature;
use edgestack_auth::{Authenticator, SharedSecret};

/// Shared secret used by every test service.
pub const TEST_SECRET: &[u8] = b"integration-secret";

/// Build a service over a fresh provider with empty state.
#[must_use]
pub fn test_service() -> ApiHttpService<EdgeStackApiHandler> {
    let provider = EdgeStackApi::new();
    let handler = EdgeStackApiHandler::new(Arc::new(provider));
    let authenticator = Authenticator::new(SharedSecret::new(TEST_SECRET.to_vec()));
    ApiHttpService::new(Arc::new(handler), authenticator, ApiHttpConfig::default())
}

/// Build a correctly signed request.
///
/// The signature covers the path without the query string, exactly as the
/// external signer does.
#[must_use]
pub fn signed_request(
    method: &str,
    path_and_query: &str,
    actor: &str,
    body: Option<&serde_json::Value>,
) -> http::Request<Full<Bytes>> {
    let path = path_and_query.split('?').next().unwrap_or(path_and_query);
    let ts = chrono::Utc::now().timestamp_millis().to_string();
    let canonical = build_canonical_string(&ts, method, path, actor);
    let signature = compute_signature(&SharedSecret::new(TEST_SECRET.to_vec()), &canonical);

    let bytes = body.map_or_else(Bytes::new, |v| {
        Bytes::from(serde_json::to_vec(v).expect("serializable body"))
    });

    http::Request::builder()
        .method(method)
        .uri(format!("http://localhost{path_and_query}"))
        .header("x-actor", actor)
        .header("x-timestamp", ts)
        .header("x-signature", signature)
        .header("content-type", "application/json")
        .body(Full::new(bytes))
        .expect("valid request")
}

/// Build a request with no credential headers.
#[must_use]
pub fn unsigned_request(method: &str, path: &str) -> http::Request<Full<Bytes>> {
    http::Request::builder()
        .method(method)
        .uri(format!("http://localhost{path}"))
        .body(Full::new(Bytes::new()))
        .expect("valid request")
}

/// Drive one request through the service and decode the JSON response.
pub async fn call(
    service: &ApiHttpService<EdgeStackApiHandler>,
    req: http::Request<Full<Bytes>>,
) -> (http::response::Parts, serde_json::Value) {
    // The service error type is Infallible.
    let response = service.call(req).await.unwrap_or_else(|e| match e {});
    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .expect("collect response body")
        .to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (parts, json)
}

mod test_auth;
mod test_interactions;
mod test_items;
mod test_profile;
