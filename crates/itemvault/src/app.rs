use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::items::{
        create_item, delete_item, get_item, invalid_endpoint, missing_item_id, update_item,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// `/item` with a bare or empty trailing id rejects with "Item ID not
/// provided"; every path outside `/item` falls through to "Invalid
/// endpoint". No timeout layer is applied: a request runs to completion
/// or the connection drops.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/item",
            get(missing_item_id)
                .post(create_item)
                .put(update_item)
                .delete(missing_item_id),
        )
        .route("/item/", get(missing_item_id).delete(missing_item_id))
        .route("/item/{id}", get(get_item).delete(delete_item))
        .fallback(invalid_endpoint)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_item_lifecycle() {
        let app = create_app(AppState::default());

        // Create
        let response = app
            .clone()
            .oneshot(json_request("POST", "/item", r#"{"id":"1","name":"Item 1"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"message": "Item created"}));

        // Read it back
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/item/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"id": "1", "name": "Item 1"}));

        // Update
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/item",
                r#"{"id":"1","name":"Item 1 Updated"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"message": "Item updated"}));

        // Read reflects the update
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/item/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": "1", "name": "Item 1 Updated"})
        );

        // Delete
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/item/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"message": "Item deleted"}));

        // Gone
        let response = app
            .oneshot(empty_request("GET", "/item/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Item not found"}));
    }

    #[tokio::test]
    async fn test_get_nonexistent_item() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request("GET", "/item/nonexistent"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Item not found"}));
    }

    #[tokio::test]
    async fn test_get_item_without_id() {
        let app = create_app(AppState::default());

        for uri in ["/item/", "/item"] {
            let response = app
                .clone()
                .oneshot(empty_request("GET", uri))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({"error": "Item ID not provided"})
            );
        }
    }

    #[tokio::test]
    async fn test_delete_item_without_id() {
        let app = create_app(AppState::default());

        for uri in ["/item/", "/item"] {
            let response = app
                .clone()
                .oneshot(empty_request("DELETE", uri))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({"error": "Item ID not provided"})
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_endpoint() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request("GET", "/other/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid endpoint"}));
    }

    #[tokio::test]
    async fn test_create_duplicate_item() {
        let app = create_app(AppState::default());
        let body = r#"{"id":"1","name":"Item 1"}"#;

        let response = app
            .clone()
            .oneshot(json_request("POST", "/item", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(json_request("POST", "/item", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Item already exists"})
        );
    }

    #[tokio::test]
    async fn test_create_rejects_bad_payloads() {
        let app = create_app(AppState::default());

        // Malformed JSON
        let response = app
            .clone()
            .oneshot(json_request("POST", "/item", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Missing id field
        let response = app
            .oneshot(json_request("POST", "/item", r#"{"name":"no id"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Item ID not provided"})
        );
    }

    #[tokio::test]
    async fn test_update_nonexistent_item() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "PUT",
                "/item",
                r#"{"id":"nonexistent","name":"Nonexistent Item"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Item not found"}));
    }

    #[tokio::test]
    async fn test_delete_nonexistent_item() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request("DELETE", "/item/nonexistent"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Item not found"}));
    }

    #[tokio::test]
    async fn test_extra_fields_round_trip() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/item",
                r#"{"id":"rich","count":3,"tags":["a","b"],"nested":{"ok":true}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(empty_request("GET", "/item/rich"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id":"rich","count":3,"tags":["a","b"],"nested":{"ok":true}})
        );
    }
}
