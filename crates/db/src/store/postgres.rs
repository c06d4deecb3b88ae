use async_trait::async_trait;
use ludotheque_core::filter::GameFilter;
use ludotheque_core::game::{Game, GameChanges, NewGame};
use ludotheque_core::types::DbId;

use super::{GameStore, StoreError};
use crate::repositories::GameRepo;
use crate::DbPool;

/// [`GameStore`] backed by the `games` table.
#[derive(Clone)]
pub struct PgGameStore {
    pool: DbPool,
}

impl PgGameStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameStore for PgGameStore {
    async fn create(&self, game: NewGame) -> Result<Game, StoreError> {
        let row = GameRepo::create(&self.pool, &game).await?;
        Ok(row.into())
    }

    async fn find_all(&self, filter: &GameFilter) -> Result<Vec<Game>, StoreError> {
        let rows = GameRepo::list(&self.pool, filter).await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Game>, StoreError> {
        let row = GameRepo::find_by_id(&self.pool, id).await?;
        Ok(row.map(Game::from))
    }

    async fn update(&self, id: DbId, changes: &GameChanges) -> Result<Option<Game>, StoreError> {
        let row = GameRepo::update(&self.pool, id, changes).await?;
        Ok(row.map(Game::from))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(GameRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
