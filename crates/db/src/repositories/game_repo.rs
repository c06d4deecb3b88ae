//! Repository for the `games` table.

use ludotheque_core::filter::GameFilter;
use ludotheque_core::game::{GameChanges, NewGame};
use ludotheque_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::GameRow;

/// Column list for `games` queries.
const COLUMNS: &str = "\
    id, titre, genre, plateforme, editeur, developpeur, \
    annee_sortie, metacritic_score, temps_jeu_heures, \
    termine, favoris, date_ajout, date_modification";

/// Provides data access for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a normalized game, returning the stored row.
    pub async fn create(pool: &PgPool, game: &NewGame) -> Result<GameRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO games \
                 (titre, genre, plateforme, editeur, developpeur, \
                  annee_sortie, metacritic_score, temps_jeu_heures, \
                  termine, favoris, date_ajout, date_modification) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameRow>(&query)
            .bind(&game.titre)
            .bind(&game.genre)
            .bind(&game.plateforme)
            .bind(&game.editeur)
            .bind(&game.developpeur)
            .bind(game.annee_sortie)
            .bind(game.metacritic_score)
            .bind(game.temps_jeu_heures)
            .bind(game.termine)
            .bind(game.favoris)
            .bind(game.date_ajout)
            .bind(game.date_modification)
            .fetch_one(pool)
            .await
    }

    /// List games matching `filter`, oldest first.
    ///
    /// Each constrained list column must overlap the wanted values.
    pub async fn list(pool: &PgPool, filter: &GameFilter) -> Result<Vec<GameRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM games \
             WHERE ($1::text[] IS NULL OR genre && $1::text[]) \
               AND ($2::text[] IS NULL OR plateforme && $2::text[]) \
             ORDER BY id"
        );
        sqlx::query_as::<_, GameRow>(&query)
            .bind(&filter.genre)
            .bind(&filter.plateforme)
            .fetch_all(pool)
            .await
    }

    /// Find a game by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GameRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, GameRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Merge `changes` into a game and stamp `date_modification`.
    ///
    /// Uses `COALESCE` for non-nullable columns and a flag per nullable
    /// column so an explicit clear differs from "unchanged". The new
    /// modification time is always strictly later than the previous one.
    /// `date_ajout` is never written.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &GameChanges,
    ) -> Result<Option<GameRow>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET \
                 titre = COALESCE($2, titre), \
                 genre = COALESCE($3, genre), \
                 plateforme = COALESCE($4, plateforme), \
                 editeur = COALESCE($5, editeur), \
                 developpeur = COALESCE($6, developpeur), \
                 annee_sortie = CASE WHEN $7 THEN $8 ELSE annee_sortie END, \
                 metacritic_score = CASE WHEN $9 THEN $10 ELSE metacritic_score END, \
                 temps_jeu_heures = CASE WHEN $11 THEN $12 ELSE temps_jeu_heures END, \
                 termine = COALESCE($13, termine), \
                 favoris = COALESCE($14, favoris), \
                 date_modification = GREATEST( \
                     clock_timestamp(), \
                     date_modification + INTERVAL '1 microsecond' \
                 ) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameRow>(&query)
            .bind(id)
            .bind(&changes.titre)
            .bind(&changes.genre)
            .bind(&changes.plateforme)
            .bind(&changes.editeur)
            .bind(&changes.developpeur)
            .bind(changes.annee_sortie.is_some())
            .bind(changes.annee_sortie.flatten())
            .bind(changes.metacritic_score.is_some())
            .bind(changes.metacritic_score.flatten())
            .bind(changes.temps_jeu_heures.is_some())
            .bind(changes.temps_jeu_heures.flatten())
            .bind(changes.termine)
            .bind(changes.favoris)
            .fetch_optional(pool)
            .await
    }

    /// Delete a game by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
