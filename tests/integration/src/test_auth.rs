//! Gateway-level authentication behavior.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http_body_util::Full;

    use crate::{call, signed_request, test_service, unsigned_request};

    #[tokio::test]
    async fn test_should_allow_preflight_without_credentials() {
        let service = test_service();
        let (parts, _) = call(&service, unsigned_request("OPTIONS", "/me")).await;

        assert_eq!(parts.status, http::StatusCode::NO_CONTENT);
        // Preflight must advertise the custom signing headers.
        let allowed = parts
            .headers
            .get("access-control-allow-headers")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(allowed.contains("X-Signature"));
        assert!(allowed.contains("X-Actor"));
    }

    #[tokio::test]
    async fn test_should_reject_unsigned_request_without_reason() {
        let service = test_service();
        let (parts, body) = call(&service, unsigned_request("GET", "/me")).await;

        assert_eq!(parts.status, http::StatusCode::FORBIDDEN);
        // The opaque shape: no deny reason ever reaches the caller.
        assert_eq!(body, serde_json::json!({"message": "Forbidden"}));
    }

    #[tokio::test]
    async fn test_should_reject_tampered_signature() {
        let service = test_service();
        let mut req = signed_request("GET", "/me", "user:alice", None);
        req.headers_mut().insert(
            "x-signature",
            http::HeaderValue::from_static("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA="),
        );

        let (parts, body) = call(&service, req).await;
        assert_eq!(parts.status, http::StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Forbidden");
    }

    #[tokio::test]
    async fn test_should_reject_stale_timestamp() {
        let service = test_service();
        let mut req = signed_request("GET", "/me", "user:alice", None);
        // Rewind the timestamp ten minutes; the signature no longer matters
        // because freshness is checked first.
        let stale = (chrono::Utc::now().timestamp_millis() - 10 * 60 * 1000).to_string();
        req.headers_mut()
            .insert("x-timestamp", http::HeaderValue::from_str(&stale).unwrap());

        let (parts, _) = call(&service, req).await;
        assert_eq!(parts.status, http::StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_should_reject_actor_substitution() {
        let service = test_service();
        // Sign as one actor, claim another.
        let mut req = signed_request("GET", "/me", "user:alice", None);
        req.headers_mut()
            .insert("x-actor", http::HeaderValue::from_static("user:mallory"));

        let (parts, _) = call(&service, req).await;
        assert_eq!(parts.status, http::StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_should_answer_health_probe_unauthenticated() {
        let service = test_service();
        let (parts, body) = call(&service, unsigned_request("GET", "/health")).await;

        assert_eq!(parts.status, http::StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_should_attach_cors_and_request_id_headers() {
        let service = test_service();
        let (parts, _) = call(&service, signed_request("GET", "/me", "user:alice", None)).await;

        assert_eq!(
            parts
                .headers
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*"),
        );
        assert!(parts.headers.get("x-request-id").is_some());
        assert_eq!(
            parts.headers.get("server").and_then(|v| v.to_str().ok()),
            Some("EdgeStack"),
        );
    }

    #[tokio::test]
    async fn test_should_route_verified_request_to_unknown_path_as_not_found() {
        let service = test_service();
        let (parts, body) = call(
            &service,
            signed_request("GET", "/does-not-exist", "user:alice", None),
        )
        .await;

        assert_eq!(parts.status, http::StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_should_verify_request_with_query_string() {
        let service = test_service();
        // The query string is excluded from the signed path on both sides.
        let (parts, _) = call(
            &service,
            signed_request("GET", "/interactions?limit=5", "user:alice", None),
        )
        .await;
        assert_eq!(parts.status, http::StatusCode::OK);
    }

    #[tokio::test]
    async fn test_should_ignore_body_in_signature() {
        let service = test_service();
        // Identical envelope, different body: same signature verifies. The
        // request still fails handler validation, proving it got past auth.
        let mut req = signed_request("POST", "/interactions", "user:alice", None);
        *req.body_mut() = Full::new(Bytes::from_static(b"{\"itemId\": \"\"}"));

        let (parts, body) = call(&service, req).await;
        assert_eq!(parts.status, http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing itemId");
    }
}
