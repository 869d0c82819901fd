use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, Json, Router};
use axum_test::TestServer;
use serde_json::{json, Value};

use recommend_api::routes::{create_router, AppState};
use recommend_api::services::{Explainer, GeminiProvider, StaticCatalog};

const FALLBACK_MARKER: &str = "items you've previously viewed";

/// Serves a stand-in for the generation service on an ephemeral port
async fn spawn_generation_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn create_test_server(api_key: Option<&str>, api_url: String) -> TestServer {
    let generator = GeminiProvider::new(
        api_key.map(str::to_string),
        api_url,
        "test-model".to_string(),
        Duration::from_secs(2),
    )
    .unwrap();
    let state = AppState::new(
        Arc::new(StaticCatalog::demo()),
        Explainer::new(Arc::new(generator)),
    );
    TestServer::new(create_router(state)).unwrap()
}

fn offline_server() -> TestServer {
    create_test_server(None, "http://127.0.0.1:9".to_string())
}

#[tokio::test]
async fn test_health_check() {
    let server = offline_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = offline_server();
    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_list_products() {
    let server = offline_server();
    let response = server.get("/api/products").await;
    response.assert_status_ok();

    let products: Vec<Value> = response.json();
    assert_eq!(products.len(), 12);
    assert_eq!(products[0]["id"], 1);
    assert_eq!(products[0]["name"], "Eco-Friendly Water Bottle");
    assert!(products[0]["image"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn test_recommendations() {
    let server = offline_server();
    let response = server
        .post("/api/recommendations")
        .json(&json!({ "userHistory": [9] }))
        .await;
    response.assert_status_ok();

    let recommendations: Vec<Value> = response.json();
    let ids: Vec<u64> = recommendations.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![5, 12]);
    assert_eq!(recommendations[0]["score"], 4);
    assert_eq!(recommendations[0]["name"], "Smart Fitness Tracker");
}

#[tokio::test]
async fn test_recommendations_empty_history() {
    let server = offline_server();
    let response = server
        .post("/api/recommendations")
        .json(&json!({ "userHistory": [] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "User history is empty");
}

#[tokio::test]
async fn test_recommendations_unknown_item() {
    let server = offline_server();
    let response = server
        .post("/api/recommendations")
        .json(&json!({ "userHistory": [1, 99] }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_explain_without_credential_falls_back() {
    let server = offline_server();
    let response = server
        .post("/api/explain")
        .json(&json!({ "userHistory": [9], "recommendedProductId": 5 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["wasGenerated"], false);
    assert!(body["explanation"].as_str().unwrap().contains(FALLBACK_MARKER));
}

#[tokio::test]
async fn test_explain_provider_error_falls_back() {
    let url = spawn_generation_service(Router::new().fallback(|| async {
        (StatusCode::INTERNAL_SERVER_ERROR, "unavailable")
    }))
    .await;
    let server = create_test_server(Some("key"), url);

    let response = server
        .post("/api/explain")
        .json(&json!({ "userHistory": [9], "recommendedProductId": 5 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["wasGenerated"], false);
    let text = body["explanation"].as_str().unwrap();
    assert!(text.contains("Smart Fitness Tracker"));
    assert!(text.contains(FALLBACK_MARKER));
}

#[tokio::test]
async fn test_explain_generated() {
    let url = spawn_generation_service(Router::new().fallback(|| async {
        Json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Because you liked the Yoga Mat, this tracker fits." }] } }]
        }))
    }))
    .await;
    let server = create_test_server(Some("key"), url);

    let response = server
        .post("/api/explain")
        .json(&json!({ "userHistory": [9], "recommendedProductId": 5 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["wasGenerated"], true);
    assert_eq!(
        body["explanation"],
        "Because you liked the Yoga Mat, this tracker fits."
    );
}

#[tokio::test]
async fn test_explain_missing_target() {
    let server = offline_server();
    let response = server
        .post("/api/explain")
        .json(&json!({ "userHistory": [9] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_explain_missing_history() {
    let server = offline_server();
    let response = server
        .post("/api/explain")
        .json(&json!({ "recommendedProductId": 5 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid input: Missing user history");
}

#[tokio::test]
async fn test_explain_empty_history_is_accepted() {
    let server = offline_server();
    let response = server
        .post("/api/explain")
        .json(&json!({ "userHistory": [], "recommendedProductId": 5 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["wasGenerated"], false);
}

#[tokio::test]
async fn test_explain_unknown_ids() {
    let server = offline_server();

    let response = server
        .post("/api/explain")
        .json(&json!({ "userHistory": [9], "recommendedProductId": 404 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .post("/api/explain")
        .json(&json!({ "userHistory": [404], "recommendedProductId": 5 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
