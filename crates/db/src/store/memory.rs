use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use ludotheque_core::filter::GameFilter;
use ludotheque_core::game::{Game, GameChanges, NewGame};
use ludotheque_core::types::DbId;
use tokio::sync::RwLock;

use super::{GameStore, StoreError};

/// [`GameStore`] kept in process memory. Contents are lost on exit.
#[derive(Default)]
pub struct MemoryGameStore {
    inner: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: DbId,
    games: BTreeMap<DbId, Game>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn create(&self, game: NewGame) -> Result<Game, StoreError> {
        let mut state = self.inner.write().await;
        state.last_id += 1;
        let game = game.with_id(state.last_id);
        state.games.insert(game.id, game.clone());
        Ok(game)
    }

    async fn find_all(&self, filter: &GameFilter) -> Result<Vec<Game>, StoreError> {
        let state = self.inner.read().await;
        Ok(state
            .games
            .values()
            .filter(|game| filter.matches(game))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Game>, StoreError> {
        Ok(self.inner.read().await.games.get(&id).cloned())
    }

    async fn update(&self, id: DbId, changes: &GameChanges) -> Result<Option<Game>, StoreError> {
        let mut state = self.inner.write().await;
        let Some(game) = state.games.get_mut(&id) else {
            return Ok(None);
        };

        changes.apply_to(game);
        let floor = game.date_modification + Duration::microseconds(1);
        game.date_modification = Utc::now().max(floor);

        Ok(Some(game.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.games.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludotheque_core::game::{build_game_changes, normalize_game};
    use serde_json::json;

    async fn seed(store: &MemoryGameStore, payload: serde_json::Value) -> Game {
        store
            .create(normalize_game(&payload, Utc::now()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryGameStore::new();
        let a = seed(&store, json!({"titre": "A"})).await;
        let b = seed(&store, json!({"titre": "B"})).await;

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.find_by_id(2).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn find_all_applies_filter_in_id_order() {
        let store = MemoryGameStore::new();
        seed(&store, json!({"titre": "A", "genre": "RPG", "plateforme": "PC"})).await;
        seed(&store, json!({"titre": "B", "genre": "Action", "plateforme": "Switch"})).await;
        seed(&store, json!({"titre": "C", "genre": "Action", "plateforme": "PC"})).await;

        let filter = GameFilter::from_query_pairs([("genre", "RPG,Action"), ("plateforme", "PC")]);
        let titles: Vec<String> = store
            .find_all(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.titre)
            .collect();

        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(store.find_all(&GameFilter::default()).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_keeps_creation_time_and_advances_modification_time() {
        let store = MemoryGameStore::new();
        let created = seed(&store, json!({"titre": "Old", "genre": "RPG"})).await;

        let changes = build_game_changes(&json!({
            "titre": "New",
            "favoris": true,
            "date_ajout": "2000-01-01T00:00:00Z"
        }))
        .unwrap();
        let first = store.update(created.id, &changes).await.unwrap().unwrap();
        let second = store.update(created.id, &changes).await.unwrap().unwrap();

        assert_eq!(first.titre, "New");
        assert!(first.favoris);
        assert_eq!(first.genre, vec!["RPG"]);
        assert_eq!(first.date_ajout, created.date_ajout);
        assert_eq!(second.date_ajout, created.date_ajout);
        assert!(first.date_modification > created.date_modification);
        assert!(second.date_modification > first.date_modification);
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_id() {
        let store = MemoryGameStore::new();
        assert_eq!(store.update(9, &GameChanges::favorite()).await.unwrap(), None);
        assert!(!store.delete(9).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = MemoryGameStore::new();
        let game = seed(&store, json!({"titre": "Gone"})).await;

        assert!(store.delete(game.id).await.unwrap());
        assert_eq!(store.find_by_id(game.id).await.unwrap(), None);
    }
}
