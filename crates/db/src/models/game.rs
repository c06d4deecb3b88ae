//! Row mapping for the `games` table.

use ludotheque_core::game::Game;
use ludotheque_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: DbId,
    pub titre: String,
    pub genre: Vec<String>,
    pub plateforme: Vec<String>,
    pub editeur: String,
    pub developpeur: String,
    pub annee_sortie: Option<f64>,
    pub metacritic_score: Option<f64>,
    pub temps_jeu_heures: Option<f64>,
    pub termine: bool,
    pub favoris: bool,
    pub date_ajout: Timestamp,
    pub date_modification: Timestamp,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: row.id,
            titre: row.titre,
            genre: row.genre,
            plateforme: row.plateforme,
            editeur: row.editeur,
            developpeur: row.developpeur,
            annee_sortie: row.annee_sortie,
            metacritic_score: row.metacritic_score,
            temps_jeu_heures: row.temps_jeu_heures,
            termine: row.termine,
            favoris: row.favoris,
            date_ajout: row.date_ajout,
            date_modification: row.date_modification,
        }
    }
}
