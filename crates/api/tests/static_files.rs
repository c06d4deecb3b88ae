//! Tests for serving the static front-end as the router fallback.

mod common;

use axum::http::StatusCode;
use common::{get, test_config, test_store};
use http_body_util::BodyExt;
use ludotheque_api::router::build_app_router;
use ludotheque_api::state::AppState;

#[tokio::test]
async fn static_dir_is_served_behind_api_routes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Collection</h1>").unwrap();

    let mut config = test_config();
    config.static_dir = dir.path().to_string_lossy().into_owned();
    let app = build_app_router(AppState { store: test_store() }, &config);

    let response = get(app.clone(), "/index.html").await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>Collection</h1>");

    // API routes still win over the fallback.
    let response = get(app.clone(), "/api/games").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/missing.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
