//! Item catalog endpoint behavior through the full pipeline.

#[cfg(test)]
mod tests {
    use crate::{call, signed_request, test_service};

    const ITEM_PATH: &str = "/items/item:123e4567-e89b-12d3-a456-426614174000";

    #[tokio::test]
    async fn test_should_create_item() {
        let service = test_service();
        let body = serde_json::json!({
            "title": "Resistance band set",
            "category": "fitness",
            "tags": ["bands", "mobility"],
            "popularity": 3,
        });
        let (parts, response) = call(
            &service,
            signed_request("PUT", ITEM_PATH, "user:admin", Some(&body)),
        )
        .await;

        assert_eq!(parts.status, http::StatusCode::OK);
        assert_eq!(response["ok"], true);
        assert_eq!(
            response["updated"],
            serde_json::json!(["category", "popularity", "tags", "title"]),
        );
    }

    #[tokio::test]
    async fn test_should_forbid_guest_item_write() {
        let service = test_service();
        let body = serde_json::json!({"title": "x"});
        let (parts, response) = call(
            &service,
            signed_request("PUT", ITEM_PATH, "guest:g-1", Some(&body)),
        )
        .await;

        assert_eq!(parts.status, http::StatusCode::FORBIDDEN);
        assert_eq!(response["error"], "Only users (admins) can create/update items");
    }

    #[tokio::test]
    async fn test_should_reject_malformed_item_id() {
        let service = test_service();
        let body = serde_json::json!({"title": "x"});
        let (parts, response) = call(
            &service,
            signed_request("PUT", "/items/item:not-a-uuid", "user:admin", Some(&body)),
        )
        .await;

        assert_eq!(parts.status, http::StatusCode::BAD_REQUEST);
        assert!(
            response["error"]
                .as_str()
                .is_some_and(|m| m.contains("itemId"))
        );
    }

    #[tokio::test]
    async fn test_should_reject_invalid_category_with_details() {
        let service = test_service();
        let body = serde_json::json!({"category": "music"});
        let (parts, response) = call(
            &service,
            signed_request("PUT", ITEM_PATH, "user:admin", Some(&body)),
        )
        .await;

        assert_eq!(parts.status, http::StatusCode::BAD_REQUEST);
        assert_eq!(
            response["details"]["category"],
            "Must be one of: education, fitness, tools",
        );
    }
}
