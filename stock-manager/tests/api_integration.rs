//! Integration tests for the JSON API
//!
//! Drives the full router (routing, extraction, use cases, repository)
//! against the in-memory store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use stock_manager::{AppState, InMemoryStockRepository, create_router};
use tower::ServiceExt;

// ============================================================================
// Test Fixtures
// ============================================================================

fn create_test_app() -> (Router, Arc<InMemoryStockRepository>) {
    let repo = Arc::new(InMemoryStockRepository::new());
    let state = Arc::new(AppState::new(Arc::clone(&repo)));
    (create_router(state), repo)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn create_stock(app: &Router, name: &str, ticker: &str, price: f64) -> i64 {
    let (status, json) = send(
        app,
        "POST",
        "/api/stocks",
        Some(json!({"name": name, "ticker": ticker, "price": price})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["id"].as_i64().unwrap()
}

// ============================================================================
// Create / Read
// ============================================================================

#[tokio::test]
async fn test_create_returns_created_message() {
    let (app, _) = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/stocks",
        Some(json!({"name": "Apple", "ticker": "AAPL", "price": 180.57})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Stock created");
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn test_round_trip_create_then_get() {
    let (app, _) = create_test_app();
    let id = create_stock(&app, "Alphabet", "GOOGL", 2801.12).await;

    let (status, json) = send(&app, "GET", &format!("/api/stocks/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Alphabet");
    assert_eq!(json["ticker"], "GOOGL");
    assert_eq!(json["price"].as_f64().unwrap(), 2801.12);
}

#[tokio::test]
async fn test_create_accepts_price_as_string() {
    let (app, _) = create_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/stocks",
        Some(json!({"name": "Microsoft", "ticker": "MSFT", "price": "345.67"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, json) = send(&app, "GET", "/api/stocks/1", None).await;
    assert_eq!(json["price"].as_f64().unwrap(), 345.67);
}

#[tokio::test]
async fn test_list_ordered_by_id() {
    let (app, _) = create_test_app();
    let first = create_stock(&app, "Zeta Corp", "ZETA", 1.0).await;
    let second = create_stock(&app, "Alpha Corp", "ALPH", 2.0).await;
    let third = create_stock(&app, "Mid Corp", "MIDC", 3.0).await;

    let (status, json) = send(&app, "GET", "/api/stocks", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[tokio::test]
async fn test_list_empty() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, "GET", "/api/stocks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_get_unknown_stock() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, "GET", "/api/stocks/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());
}

// ============================================================================
// Create - validation failures
// ============================================================================

#[tokio::test]
async fn test_create_missing_field() {
    let (app, repo) = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/stocks",
        Some(json!({"name": "Apple", "price": 1.0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("ticker"));
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_invalid_price() {
    let (app, repo) = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/stocks",
        Some(json!({"name": "Apple", "ticker": "AAPL", "price": "abc"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Invalid price"));
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_duplicate_ticker() {
    let (app, repo) = create_test_app();
    create_stock(&app, "Apple", "AAPL", 180.0).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/stocks",
        Some(json!({"name": "Apple Again", "ticker": "AAPL", "price": 1.0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("AAPL"));
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_create_non_numeric_price_type() {
    let (app, repo) = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/stocks",
        Some(json!({"name": "Apple", "ticker": "AAPL", "price": true})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Invalid price"));
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_wrong_field_type_is_structured_error() {
    let (app, repo) = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/stocks",
        Some(json!({"name": 5, "ticker": "AAPL", "price": 1.0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid request body"));
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_update_malformed_body_is_structured_error() {
    let (app, _) = create_test_app();
    let id = create_stock(&app, "Apple", "AAPL", 180.0).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/stocks/{id}"))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].is_string());
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_single_field() {
    let (app, _) = create_test_app();
    let id = create_stock(&app, "Apple", "AAPL", 180.0).await;

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/stocks/{id}"),
        Some(json!({"price": 199.99})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"message": "Stock updated"}));

    let (_, json) = send(&app, "GET", &format!("/api/stocks/{id}"), None).await;
    assert_eq!(json["name"], "Apple");
    assert_eq!(json["ticker"], "AAPL");
    assert_eq!(json["price"].as_f64().unwrap(), 199.99);
}

#[tokio::test]
async fn test_update_requires_some_field() {
    let (app, _) = create_test_app();
    let id = create_stock(&app, "Apple", "AAPL", 180.0).await;

    let (status, _) = send(&app, "PUT", &format!("/api/stocks/{id}"), Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_invalid_price_changes_nothing() {
    let (app, _) = create_test_app();
    let id = create_stock(&app, "Apple", "AAPL", 180.0).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/stocks/{id}"),
        Some(json!({"name": "Renamed", "price": "abc"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, json) = send(&app, "GET", &format!("/api/stocks/{id}"), None).await;
    assert_eq!(json["name"], "Apple");
    assert_eq!(json["price"].as_f64().unwrap(), 180.0);
}

#[tokio::test]
async fn test_update_to_duplicate_ticker() {
    let (app, _) = create_test_app();
    create_stock(&app, "Apple", "AAPL", 180.0).await;
    let msft = create_stock(&app, "Microsoft", "MSFT", 345.0).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/stocks/{msft}"),
        Some(json!({"ticker": "AAPL"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_stock() {
    let (app, _) = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/api/stocks/7",
        Some(json!({"name": "Ghost"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_stock() {
    let (app, repo) = create_test_app();
    let id = create_stock(&app, "Apple", "AAPL", 180.0).await;

    let (status, json) = send(&app, "DELETE", &format!("/api/stocks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"message": "Stock deleted"}));
    assert!(repo.is_empty());

    let (status, _) = send(&app, "GET", &format!("/api/stocks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_stock_changes_nothing() {
    let (app, repo) = create_test_app();
    create_stock(&app, "Apple", "AAPL", 180.0).await;

    let (status, _) = send(&app, "DELETE", "/api/stocks/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(repo.len(), 1);
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_creates_with_distinct_tickers() {
    let (app, _) = create_test_app();

    let (a, b) = tokio::join!(
        send(
            &app,
            "POST",
            "/api/stocks",
            Some(json!({"name": "Apple", "ticker": "AAPL", "price": 1.0})),
        ),
        send(
            &app,
            "POST",
            "/api/stocks",
            Some(json!({"name": "Microsoft", "ticker": "MSFT", "price": 2.0})),
        ),
    );
    assert_eq!(a.0, StatusCode::CREATED);
    assert_eq!(b.0, StatusCode::CREATED);

    let (_, json) = send(&app, "GET", "/api/stocks", None).await;
    let mut tickers: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["ticker"].as_str().unwrap())
        .collect();
    tickers.sort();
    assert_eq!(tickers, vec!["AAPL", "MSFT"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_creates_get_unique_ids() {
    let (app, repo) = create_test_app();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    "POST",
                    "/api/stocks",
                    Some(json!({"name": format!("Co {i}"), "ticker": format!("T{i}"), "price": i})),
                )
                .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let (status, json) = handle.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        ids.push(json["id"].as_i64().unwrap());
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 20);
    assert_eq!(repo.len(), 20);
}
