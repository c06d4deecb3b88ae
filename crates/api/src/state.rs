use std::sync::Arc;

use ludotheque_db::store::GameStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Game persistence, chosen at startup.
    pub store: Arc<dyn GameStore>,
}
