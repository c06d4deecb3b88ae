//! Collection-wide statistics.

use serde::{Deserialize, Serialize};

use crate::game::Game;

/// Summary figures for a listing of games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total_jeux: usize,
    /// Sum of play time; games without a value count as zero.
    pub temps_total_heures: f64,
    pub jeux_termines: usize,
    /// Mean Metacritic score over games that have one, rounded to one
    /// decimal. `0.0` when no game has a score.
    pub metacritic_moyen: f64,
}

/// Compute [`CollectionStats`] over `games`. An empty slice yields all zeros.
pub fn compute_stats(games: &[Game]) -> CollectionStats {
    let temps_total_heures = games
        .iter()
        .map(|g| g.temps_jeu_heures.unwrap_or(0.0))
        .sum();

    let jeux_termines = games.iter().filter(|g| g.termine).count();

    let scores: Vec<f64> = games.iter().filter_map(|g| g.metacritic_score).collect();
    let metacritic_moyen = if scores.is_empty() {
        0.0
    } else {
        round_one_decimal(scores.iter().sum::<f64>() / scores.len() as f64)
    };

    CollectionStats {
        total_jeux: games.len(),
        temps_total_heures,
        jeux_termines,
        metacritic_moyen,
    }
}

/// Round the exact binary value of `value` to one decimal, halves away from
/// zero.
///
/// Scaling by ten first would turn values just below a midpoint (80.05 is
/// stored as 80.0499…) into ties. Formatting rounds the exact value, and
/// the only exact ties a binary float can hit at one decimal are quarters
/// (`x.25`, `x.75`), which scale by ten without error.
fn round_one_decimal(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}
