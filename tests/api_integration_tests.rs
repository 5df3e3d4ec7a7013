//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;
use ttl_cache::{api::create_router, AppState, CacheConfig, TtlCache};

// == Helper Functions ==

fn create_test_app() -> Router {
    create_app(TtlCache::unbounded())
}

fn create_app(cache: TtlCache) -> Router {
    let state = AppState::new(cache, Duration::from_secs(300));
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn set_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/set")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(key: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/get/{}", key))
        .body(Body::empty())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app();

    let (status, json) = send(&app, set_request(r#"{"key":"test_key","value":"test_value"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("test_key"));
}

#[tokio::test]
async fn test_set_endpoint_with_ttl() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        set_request(r#"{"key":"ttl_key","value":"ttl_value","ttl_ms":60000}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&app, get_request("ttl_key")).await;
    assert_eq!(status, StatusCode::OK);
    let remaining = json["ttl_remaining_ms"].as_u64().unwrap();
    assert!(remaining <= 60_000 && remaining > 50_000);
}

#[tokio::test]
async fn test_set_endpoint_empty_key() {
    let app = create_test_app();

    let (status, json) = send(&app, set_request(r#"{"key":"","value":"v"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_set_endpoint_zero_ttl_not_stored() {
    let app = create_test_app();

    let (status, _) = send(&app, set_request(r#"{"key":"zero","value":"v","ttl_ms":0}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get_request("zero")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_test_app();

    send(&app, set_request(r#"{"key":"get_key","value":"get_value"}"#)).await;
    let (status, json) = send(&app, get_request("get_key")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"].as_str().unwrap(), "get_key");
    assert_eq!(json["value"].as_str().unwrap(), "get_value");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let (status, json) = send(&app, get_request("nonexistent_key")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("nonexistent_key"));
}

#[tokio::test]
async fn test_get_endpoint_expired() {
    let app = create_test_app();

    send(&app, set_request(r#"{"key":"short","value":"v","ttl_ms":20}"#)).await;
    tokio::time::sleep(Duration::from_millis(40)).await;

    let (status, _) = send(&app, get_request("short")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stats) = send(&app, empty_request("GET", "/stats")).await;
    assert_eq!(stats["total_entries"], 0);
    assert_eq!(stats["expirations"], 1);
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint_success() {
    let app = create_test_app();

    send(&app, set_request(r#"{"key":"delete_key","value":"delete_value"}"#)).await;

    let (status, _) = send(&app, empty_request("DELETE", "/del/delete_key")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get_request("delete_key")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_endpoint_absent_key() {
    let app = create_test_app();

    let (status, _) = send(&app, empty_request("DELETE", "/del/nonexistent_key")).await;

    assert_eq!(status, StatusCode::OK);
}

// == Sweep / Clear Endpoint Tests ==

#[tokio::test]
async fn test_purge_expired_endpoint() {
    let app = create_test_app();

    send(&app, set_request(r#"{"key":"a","value":"1","ttl_ms":10}"#)).await;
    send(&app, set_request(r#"{"key":"b","value":"2","ttl_ms":10}"#)).await;
    send(&app, set_request(r#"{"key":"c","value":"3"}"#)).await;
    tokio::time::sleep(Duration::from_millis(30)).await;

    let (status, json) = send(&app, empty_request("POST", "/expired/purge")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], 2);
    assert_eq!(json["total_entries"], 1);
}

#[tokio::test]
async fn test_clear_endpoint() {
    let app = create_test_app();

    send(&app, set_request(r#"{"key":"a","value":"1"}"#)).await;
    send(&app, set_request(r#"{"key":"b","value":"2"}"#)).await;

    let (status, _) = send(&app, empty_request("DELETE", "/clear")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = send(&app, empty_request("GET", "/stats")).await;
    assert_eq!(stats["total_entries"], 0);
}

// == Capacity Tests ==

#[tokio::test]
async fn test_bounded_cache_drops_insert_when_full() {
    let app = create_app(TtlCache::new(CacheConfig::bounded(2).unwrap()));

    send(&app, set_request(r#"{"key":"a","value":"1"}"#)).await;
    send(&app, set_request(r#"{"key":"b","value":"2"}"#)).await;
    let (status, _) = send(&app, set_request(r#"{"key":"c","value":"3"}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get_request("c")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stats) = send(&app, empty_request("GET", "/stats")).await;
    assert_eq!(stats["total_entries"], 2);
    assert_eq!(stats["dropped_inserts"], 1);
    assert_eq!(stats["max_size"], 2);
}

// == Stats / Health Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_counts() {
    let app = create_test_app();

    send(&app, set_request(r#"{"key":"k","value":"v"}"#)).await;
    send(&app, get_request("k")).await;
    send(&app, get_request("missing")).await;

    let (status, json) = send(&app, empty_request("GET", "/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
    assert!((json["hit_rate"].as_f64().unwrap() - 0.5).abs() < 0.001);
    assert!(json["max_size"].is_null());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, empty_request("GET", "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}
