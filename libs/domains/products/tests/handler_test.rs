//! Handler tests for the Products domain
//!
//! These tests drive the real router over the in-memory repository and
//! verify the HTTP contract end to end:
//! - status codes per operation
//! - the `{success, data|msg}` envelope shape
//! - not-found and missing-body behavior

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::{handlers, InMemoryProductRepository, Product, ProductService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_widget() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Widget",
                "description": "A widget",
                "price": 9.99
            }))
            .unwrap(),
        ))
        .unwrap()
}

async fn create_widget(app: &Router) -> Product {
    let response = app.clone().oneshot(post_widget()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    serde_json::from_value(body["data"].clone()).unwrap()
}

#[tokio::test]
async fn test_list_empty_table_yields_empty_array() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"success": true, "data": []}));
}

#[tokio::test]
async fn test_create_returns_stored_row_with_id() {
    let app = app();

    let response = app.oneshot(post_widget()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Widget");
    assert_eq!(body["data"]["description"], "A widget");
    assert_eq!(body["data"]["price"], 9.99);
    assert!(body["data"]["id"].is_i64());
}

#[tokio::test]
async fn test_create_without_body_is_400_no_data() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"success": false, "msg": "No Data"}));
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], created.id);
    assert_eq!(body["data"]["name"], "Widget");
    assert_eq!(body["data"]["description"], "A widget");
    assert_eq!(body["data"]["price"], 9.99);
}

#[tokio::test]
async fn test_get_missing_product_is_404_with_message() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/999999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({"success": false, "msg": "No product with id: 999999"})
    );
}

#[tokio::test]
async fn test_get_non_numeric_id_is_400() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_records_have_the_table_columns() {
    let app = app();
    create_widget(&app).await;
    create_widget(&app).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 2);

    for record in records {
        let keys: Vec<&str> = record.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["description", "id", "name", "price"]);
    }
}

#[tokio::test]
async fn test_update_changes_fields_and_keeps_id() {
    let app = app();
    let created = create_widget(&app).await;
    let other = create_widget(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", created.id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "name": "Gadget",
                        "description": "A gadget",
                        "price": 19.99
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], created.id);
    assert_eq!(body["data"]["name"], "Gadget");

    // Other rows are untouched
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", other.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Widget");
}

#[tokio::test]
async fn test_update_missing_product_is_404() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/999999")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "name": "Ghost",
                        "description": "n/a",
                        "price": 0.0
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["msg"], "No product with id: 999999");
}

#[tokio::test]
async fn test_update_without_body_is_400_no_data() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["msg"], "No Data");
}

#[tokio::test]
async fn test_update_missing_product_without_body_is_still_404() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The existence check wins over the body check.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_204_with_confirmation_body() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({
            "success": true,
            "msg": format!("Product with id: {} deleted", created.id)
        })
    );

    // The row is gone afterwards
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_product_is_404() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({"success": false, "msg": "No product with id: 999999"})
    );
}
