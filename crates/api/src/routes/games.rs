//! Route definitions for the game collection.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Game routes mounted at `/api/games`.
///
/// Static segments (`stats`, `export`) take precedence over `{id}`.
///
/// ```text
/// GET    /                -> list_games
/// POST   /                -> create_game
/// GET    /stats           -> get_stats
/// GET    /export          -> export_games
/// GET    /{id}            -> get_game
/// PUT    /{id}            -> update_game
/// DELETE /{id}            -> delete_game
/// POST   /{id}/favorite   -> favorite_game
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list_games).post(games::create_game))
        .route("/stats", get(games::get_stats))
        .route("/export", get(games::export_games))
        .route(
            "/{id}",
            get(games::get_game)
                .put(games::update_game)
                .delete(games::delete_game),
        )
        .route("/{id}/favorite", post(games::favorite_game))
}
