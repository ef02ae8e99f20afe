//! Interaction endpoints through the full pipeline.

#[cfg(test)]
mod tests {
    use edgestack_api_core::EdgeStackApiHandler;
    use edgestack_api_http::ApiHttpService;

    use crate::{call, signed_request, test_service};

    const ITEM_ID: &str = "item:123e4567-e89b-12d3-a456-426614174000";

    /// Seed the catalog through the API so interactions have a target.
    async fn service_with_item() -> ApiHttpService<EdgeStackApiHandler> {
        let service = test_service();
        let body = serde_json::json!({"title": "Seed item", "category": "tools"});
        let (parts, _) = call(
            &service,
            signed_request("PUT", &format!("/items/{ITEM_ID}"), "user:admin", Some(&body)),
        )
        .await;
        assert_eq!(parts.status, http::StatusCode::OK);
        service
    }

    #[tokio::test]
    async fn test_should_log_interaction_and_read_it_back() {
        let service = service_with_item().await;

        let body = serde_json::json!({"itemId": ITEM_ID, "eventType": "LIKE"});
        let (parts, response) = call(
            &service,
            signed_request("POST", "/interactions", "user:42", Some(&body)),
        )
        .await;
        assert_eq!(parts.status, http::StatusCode::OK);
        assert_eq!(response["ok"], true);
        assert_eq!(response["logged"]["eventType"], "LIKE");
        assert_eq!(response["logged"]["weight"], 2);
        assert_eq!(response["logged"]["userId"], "42");

        let (parts, listed) = call(
            &service,
            signed_request("GET", "/interactions", "user:42", None),
        )
        .await;
        assert_eq!(parts.status, http::StatusCode::OK);
        let interactions = listed["interactions"].as_array().unwrap();
        assert_eq!(interactions.len(), 1);
        assert_eq!(interactions[0]["itemId"], ITEM_ID);
    }

    #[tokio::test]
    async fn test_should_reject_interaction_for_unknown_item() {
        let service = test_service();
        let body = serde_json::json!({"itemId": ITEM_ID});
        let (parts, response) = call(
            &service,
            signed_request("POST", "/interactions", "user:42", Some(&body)),
        )
        .await;

        assert_eq!(parts.status, http::StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "itemId does not exist");
    }

    #[tokio::test]
    async fn test_should_filter_interactions_by_event_type() {
        let service = service_with_item().await;

        for event in ["VIEW", "LIKE", "VIEW"] {
            let body = serde_json::json!({"itemId": ITEM_ID, "eventType": event});
            let (parts, _) = call(
                &service,
                signed_request("POST", "/interactions", "guest:g-7", Some(&body)),
            )
            .await;
            assert_eq!(parts.status, http::StatusCode::OK);
        }

        let (parts, listed) = call(
            &service,
            signed_request("GET", "/interactions?eventType=view", "guest:g-7", None),
        )
        .await;
        assert_eq!(parts.status, http::StatusCode::OK);
        let interactions = listed["interactions"].as_array().unwrap();
        assert_eq!(interactions.len(), 2);
        assert!(
            interactions
                .iter()
                .all(|record| record["eventType"] == "VIEW")
        );
    }

    #[tokio::test]
    async fn test_should_reject_unknown_event_type_filter() {
        let service = service_with_item().await;
        let (parts, response) = call(
            &service,
            signed_request("GET", "/interactions?eventType=DOWNVOTE", "user:42", None),
        )
        .await;

        assert_eq!(parts.status, http::StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "Invalid eventType: DOWNVOTE");
    }

    #[tokio::test]
    async fn test_should_apply_limit_newest_first() {
        let service = service_with_item().await;

        for _ in 0..4 {
            let body = serde_json::json!({"itemId": ITEM_ID});
            call(
                &service,
                signed_request("POST", "/interactions", "user:42", Some(&body)),
            )
            .await;
        }

        let (parts, listed) = call(
            &service,
            signed_request("GET", "/interactions?limit=2", "user:42", None),
        )
        .await;
        assert_eq!(parts.status, http::StatusCode::OK);
        let interactions = listed["interactions"].as_array().unwrap();
        assert_eq!(interactions.len(), 2);

        // Newest first: timestamps descend.
        let first = interactions[0]["ts"].as_str().unwrap();
        let second = interactions[1]["ts"].as_str().unwrap();
        assert!(first >= second);
    }
}
