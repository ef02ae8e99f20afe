//! Profile endpoint behavior through the full pipeline.

#[cfg(test)]
mod tests {
    use crate::{call, signed_request, test_service};

    #[tokio::test]
    async fn test_should_round_trip_profile_update() {
        let service = test_service();

        let update = serde_json::json!({
            "email": "alice@example.org",
            "displayName": "Alice",
            "interestTags": ["rust"],
        });
        let (parts, body) = call(
            &service,
            signed_request("PUT", "/me", "user:alice", Some(&update)),
        )
        .await;
        assert_eq!(parts.status, http::StatusCode::OK);
        assert_eq!(body["ok"], true);

        let (parts, profile) =
            call(&service, signed_request("GET", "/me", "user:alice", None)).await;
        assert_eq!(parts.status, http::StatusCode::OK);
        assert_eq!(profile["userId"], "alice");
        assert_eq!(profile["email"], "alice@example.org");
        assert_eq!(profile["interestTags"], serde_json::json!(["rust"]));
    }

    #[tokio::test]
    async fn test_should_return_guest_stub_profile() {
        let service = test_service();
        let (parts, profile) =
            call(&service, signed_request("GET", "/me", "guest:g-42", None)).await;

        assert_eq!(parts.status, http::StatusCode::OK);
        assert_eq!(profile["guestId"], "g-42");
        assert_eq!(profile["type"], "guest");
        assert_eq!(profile["email"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_should_forbid_guest_profile_update() {
        let service = test_service();
        let update = serde_json::json!({"displayName": "Sneaky"});
        let (parts, body) = call(
            &service,
            signed_request("PUT", "/me", "guest:g-42", Some(&update)),
        )
        .await;

        assert_eq!(parts.status, http::StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Guests cannot update user profile");
    }

    #[tokio::test]
    async fn test_should_return_validation_details() {
        let service = test_service();
        let update = serde_json::json!({
            "email": "nope",
            "applicationStatus": "maybe",
        });
        let (parts, body) = call(
            &service,
            signed_request("PUT", "/me", "user:alice", Some(&update)),
        )
        .await;

        assert_eq!(parts.status, http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
        assert!(body["details"]["email"].as_str().is_some());
        assert!(body["details"]["applicationStatus"].as_str().is_some());
    }
}
