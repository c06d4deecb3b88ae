//! The persistence interface consumed by request handlers.
//!
//! Handlers hold an `Arc<dyn GameStore>` so the backend is picked once at
//! startup: [`PgGameStore`] in production, [`MemoryGameStore`] for local
//! runs without a database and for HTTP tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use ludotheque_core::filter::GameFilter;
use ludotheque_core::game::{Game, GameChanges, NewGame};
use ludotheque_core::types::DbId;

pub use memory::MemoryGameStore;
pub use postgres::PgGameStore;

/// Errors surfaced by a [`GameStore`] backend.
///
/// A lookup miss is not an error; it is reported as `None` / `false`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for game records.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Persist a new game and return it with its assigned id.
    async fn create(&self, game: NewGame) -> Result<Game, StoreError>;

    /// Every game matching `filter`, in insertion order.
    async fn find_all(&self, filter: &GameFilter) -> Result<Vec<Game>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Game>, StoreError>;

    /// Merge `changes` into the game and stamp `date_modification`.
    ///
    /// Returns the merged record, or `None` if no game has that id.
    async fn update(&self, id: DbId, changes: &GameChanges) -> Result<Option<Game>, StoreError>;

    /// Returns `true` if a game was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release backend resources at shutdown.
    async fn close(&self) {}
}
