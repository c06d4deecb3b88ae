//! Handlers for the game collection.
//!
//! Bodies arrive as untyped JSON; validation and coercion happen in
//! `ludotheque_core::game` before anything reaches the store.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use ludotheque_core::error::CoreError;
use ludotheque_core::filter::GameFilter;
use ludotheque_core::game::{
    build_game_changes, normalize_game, validate_game_payload, GameChanges,
};
use ludotheque_core::stats::compute_stats;
use ludotheque_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::payload::parse_json_body;
use crate::response::MessageResponse;
use crate::state::AppState;

/// File name offered by the export endpoint.
const EXPORT_DISPOSITION: &str = "attachment; filename=\"games.json\"";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Game", id })
}

// ---------------------------------------------------------------------------
// Collection endpoints
// ---------------------------------------------------------------------------

/// POST /api/games
///
/// Validate and normalize a raw payload, then store it. Returns 201 with the
/// stored game.
pub async fn create_game(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload = parse_json_body(&body)?;
    validate_game_payload(&payload)?;

    let game = state
        .store
        .create(normalize_game(&payload, Utc::now()))
        .await?;

    tracing::info!(game_id = game.id, titre = %game.titre, "Game created");

    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /api/games?genre=..&plateforme=..
///
/// List games, optionally keeping only those whose genres and platforms
/// include one of the given comma-separated values.
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let filter = GameFilter::from_query_pairs(params);
    let games = state.store.find_all(&filter).await?;

    tracing::debug!(count = games.len(), filtered = !filter.is_empty(), "Games listed");

    Ok(Json(games))
}

/// GET /api/games/stats
///
/// Totals and averages over the whole collection.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let games = state.store.find_all(&GameFilter::default()).await?;
    Ok(Json(compute_stats(&games)))
}

/// GET /api/games/export
///
/// The full collection as a downloadable JSON file.
pub async fn export_games(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let games = state.store.find_all(&GameFilter::default()).await?;

    tracing::info!(count = games.len(), "Game collection exported");

    Ok(([(header::CONTENT_DISPOSITION, EXPORT_DISPOSITION)], Json(games)))
}

// ---------------------------------------------------------------------------
// Single-game endpoints
// ---------------------------------------------------------------------------

/// GET /api/games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let game = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(game))
}

/// PUT /api/games/{id}
///
/// Merge the allow-listed fields of the body into the game. `date_ajout`
/// and unknown fields are ignored.
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload = parse_json_body(&body)?;
    let changes = build_game_changes(&payload)?;

    let game = state
        .store
        .update(id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(game_id = id, "Game updated");

    Ok(Json(game))
}

/// DELETE /api/games/{id}
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(game_id = id, "Game deleted");

    Ok(Json(MessageResponse {
        message: "game deleted",
    }))
}

/// POST /api/games/{id}/favorite
///
/// Mark the game as a favorite. Idempotent.
pub async fn favorite_game(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let game = state
        .store
        .update(id, &GameChanges::favorite())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(game_id = id, "Game marked as favorite");

    Ok(Json(game))
}
