pub mod games;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                      list (?genre=&plateforme=), create
/// /games/stats                collection statistics
/// /games/export               full listing as a JSON attachment
/// /games/{id}                 get, update, delete
/// /games/{id}/favorite        mark as favorite (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/games", games::router())
}
