#[cfg(test)]
mod tests {
    use crate::models::Address;
    use crate::test_utils::TestContext;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(payload).unwrap()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let ctx = TestContext::new().await;

        let response = ctx
            .app
            .oneshot(empty_request("GET", "/api/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_addresses_empty_table_is_ok() {
        let ctx = TestContext::new().await;

        let response = ctx
            .app
            .oneshot(empty_request("GET", "/api/addresses"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let addresses: Vec<Address> = body_json(response).await;
        assert!(addresses.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get_returns_identical_record() {
        let ctx = TestContext::new().await;

        let payload = json!({
            "house_id": 10,
            "street": "Main St",
            "city": "Springfield",
            "postal_code": "12345",
            "country": "USA",
            "notes": "front entrance"
        });

        let response = ctx
            .app
            .clone()
            .oneshot(json_request("POST", "/api/addresses", &payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response
            .headers()
            .get(header::LOCATION)
            .expect("Location header missing")
            .to_str()
            .unwrap()
            .to_string();

        let created: Address = body_json(response).await;
        assert_eq!(location, format!("/api/addresses/{}", created.id));
        assert_eq!(created.house_id, 10);
        assert_eq!(created.street, "Main St");
        assert_eq!(created.notes.as_deref(), Some("front entrance"));

        let response = ctx
            .app
            .oneshot(empty_request("GET", &location))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let fetched: Address = body_json(response).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_without_body_is_bad_request() {
        let ctx = TestContext::new().await;

        let response = ctx
            .app
            .oneshot(empty_request("POST", "/api/addresses"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = body_json(response).await;
        assert_eq!(body["error"], "Address data is null");
    }

    #[tokio::test]
    async fn test_get_missing_address_returns_not_found() {
        let ctx = TestContext::new().await;

        let response = ctx
            .app
            .oneshot(empty_request("GET", "/api/addresses/42"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_preserves_ids() {
        let ctx = TestContext::new().await;
        let seeded = ctx
            .seed_address(7, "Old St", "Old Town", "00000", "Oldland", None)
            .await;

        let payload = json!({
            "street": "New St",
            "city": "New Town",
            "postal_code": "99999",
            "country": "Newland",
            "notes": "renovated"
        });

        let response = ctx
            .app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/addresses/{}", seeded.id),
                &payload,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let updated: Address = body_json(response).await;
        assert_eq!(updated.id, seeded.id);
        assert_eq!(updated.house_id, 7);
        assert_eq!(updated.street, "New St");
        assert_eq!(updated.city, "New Town");
        assert_eq!(updated.postal_code, "99999");
        assert_eq!(updated.country, "Newland");
        assert_eq!(updated.notes.as_deref(), Some("renovated"));

        // The overwrite is durable, not just echoed back
        let response = ctx
            .app
            .oneshot(empty_request(
                "GET",
                &format!("/api/addresses/{}", seeded.id),
            ))
            .await
            .unwrap();

        let fetched: Address = body_json(response).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_without_body_is_bad_request() {
        let ctx = TestContext::new().await;

        // The payload check fires before the lookup, even for a missing id
        let response = ctx
            .app
            .oneshot(empty_request("PUT", "/api/addresses/42"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_address_returns_not_found() {
        let ctx = TestContext::new().await;

        let payload = json!({
            "street": "New St",
            "city": "New Town",
            "postal_code": "99999",
            "country": "Newland",
            "notes": null
        });

        let response = ctx
            .app
            .oneshot(json_request("PUT", "/api/addresses/42", &payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_not_found() {
        let ctx = TestContext::new().await;
        let seeded = ctx
            .seed_address(3, "Gone St", "Ghost Town", "66666", "Nowhere", None)
            .await;
        let uri = format!("/api/addresses/{}", seeded.id);

        let response = ctx
            .app
            .clone()
            .oneshot(empty_request("DELETE", &uri))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = ctx
            .app
            .clone()
            .oneshot(empty_request("GET", &uri))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Deleting again misses as well
        let response = ctx
            .app
            .oneshot(empty_request("DELETE", &uri))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_by_house_id() {
        let ctx = TestContext::new().await;
        ctx.seed_address(10, "Main St", "Springfield", "12345", "USA", None)
            .await;
        ctx.seed_address(10, "Oak Ave", "Springfield", "12345", "USA", None)
            .await;
        ctx.seed_address(11, "Elm St", "Shelbyville", "54321", "USA", None)
            .await;

        let response = ctx
            .app
            .clone()
            .oneshot(empty_request("GET", "/api/addresses/houseid/10"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let addresses: Vec<Address> = body_json(response).await;
        assert_eq!(addresses.len(), 2);
        assert!(addresses.iter().all(|a| a.house_id == 10));

        let response = ctx
            .app
            .oneshot(empty_request("GET", "/api/addresses/houseid/99"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
