//! Handler tests for Items domain
//!
//! The router runs over a `PgItemRepository` backed by SeaORM's
//! `MockDatabase`, so these cover:
//! - Request extraction (path id, JSON body)
//! - Response serialization and status codes
//! - Error bodies
//!
//! A mock with no queued results fails any query it receives, which makes
//! "the store was never called" observable as a non-500 status.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::ErrorResponse;
use domain_items::*;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};
use serde_json::json;
use std::collections::BTreeMap;
use tower::ServiceExt; // For oneshot()

type Row = BTreeMap<&'static str, Value>;

fn row(id: i32, name: &str, description: &str) -> Row {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("name", Value::from(name.to_string())),
        ("description", Value::from(description.to_string())),
    ])
}

fn app_with(db: MockDatabase) -> Router {
    let repo = PgItemRepository::new(db.into_connection());
    Router::new().nest("/items", handlers::router(ItemService::new(repo)))
}

fn app_with_rows(results: Vec<Vec<Row>>) -> Router {
    app_with(MockDatabase::new(DatabaseBackend::Postgres).append_query_results(results))
}

fn empty_store() -> Router {
    app_with(MockDatabase::new(DatabaseBackend::Postgres))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
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

#[tokio::test]
async fn test_create_item_returns_201_with_id() {
    let app = app_with_rows(vec![vec![row(1, "Test Item", "Test Description")]]);

    let response = app
        .oneshot(json_request(
            "POST",
            "/items",
            json!({"name": "Test Item", "description": "Test Description"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({"id": 1, "name": "Test Item", "description": "Test Description"})
    );
}

#[tokio::test]
async fn test_get_item_returns_200() {
    let app = app_with_rows(vec![vec![row(1, "Test Item", "Test Description")]]);

    let response = app.oneshot(empty_request("GET", "/items/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "Test Item");
}

#[tokio::test]
async fn test_list_items_returns_array() {
    let app = app_with_rows(vec![vec![row(1, "a", "x"), row(2, "b", "y")]]);

    let response = app.oneshot(empty_request("GET", "/items")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_list_items_empty_is_200() {
    let app = app_with_rows(vec![vec![]]);

    let response = app.oneshot(empty_request("GET", "/items")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_non_integer_id_is_400_on_every_id_route() {
    let requests = [
        empty_request("GET", "/items/abc"),
        json_request("PUT", "/items/abc", json!({"name": "n", "description": "d"})),
        empty_request("DELETE", "/items/abc"),
    ];

    for request in requests {
        let response = empty_store().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.error, "INVALID_ID");
    }
}

#[tokio::test]
async fn test_missing_item_is_404_on_get_update_delete() {
    let requests = [
        empty_request("GET", "/items/999"),
        json_request("PUT", "/items/999", json!({"name": "n", "description": "d"})),
        empty_request("DELETE", "/items/999"),
    ];

    for request in requests {
        let response = app_with_rows(vec![vec![]]).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.message, "Item 999 not found");
    }
}

#[tokio::test]
async fn test_update_item_uses_path_id() {
    let app = app_with_rows(vec![vec![row(7, "renamed", "changed")]]);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/items/7",
            json!({"id": 123, "name": "renamed", "description": "changed"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, 7);
    assert_eq!(item.name, "renamed");
}

#[tokio::test]
async fn test_malformed_update_body_is_400_without_store_call() {
    let bodies = [
        Body::from(r#"{"name": "#),
        Body::from(r#"{"name": "only name"}"#),
        Body::from(r#"{"name": 1, "description": "d"}"#),
    ];

    for body in bodies {
        let request = Request::builder()
            .method("PUT")
            .uri("/items/1")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let response = empty_store().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.error, "JSON_EXTRACTION");
    }
}

#[tokio::test]
async fn test_create_without_content_type_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .body(Body::from(r#"{"name": "n", "description": "d"}"#))
        .unwrap();

    let response = empty_store().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_returns_removed_item() {
    let app = app_with_rows(vec![vec![row(3, "old", "gone")]]);

    let response = app
        .oneshot(empty_request("DELETE", "/items/3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, Item {
        id: 3,
        name: "old".to_string(),
        description: "gone".to_string(),
    });
}

#[tokio::test]
async fn test_store_failure_is_500_with_message() {
    let app = app_with(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())]),
    );

    let response = app.oneshot(empty_request("GET", "/items")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.error, "DATABASE_ERROR");
    assert!(body.message.contains("connection refused"));
}
