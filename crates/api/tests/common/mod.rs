#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use ludotheque_api::config::{ServerConfig, StorageBackend};
use ludotheque_api::router::build_app_router;
use ludotheque_api::state::AppState;
use ludotheque_db::store::{GameStore, MemoryGameStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// the in-memory store and a static directory that does not exist.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        storage: StorageBackend::Memory,
        database_url: None,
        static_dir: "tests/no-such-static-dir".to_string(),
    }
}

/// A fresh, empty in-memory store.
pub fn test_store() -> Arc<dyn GameStore> {
    Arc::new(MemoryGameStore::new())
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<dyn GameStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a game through the API and return its JSON.
pub async fn create_game(store: &Arc<dyn GameStore>, json: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(Arc::clone(store)), "/api/games", json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
