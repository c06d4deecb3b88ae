//! Listing filters built from query parameters.
//!
//! `?genre=RPG,Action&plateforme=PC` means: the game's genres include RPG
//! or Action, AND its platforms include PC.

use crate::coerce::split_list;
use crate::game::{Game, FIELD_GENRE, FIELD_PLATEFORME};

/// Per-field "contains any of" constraints, combined with AND.
///
/// `None` leaves the field unconstrained. `Some(vec![])` matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilter {
    pub genre: Option<Vec<String>>,
    pub plateforme: Option<Vec<String>>,
}

impl GameFilter {
    /// Build a filter from raw `(key, value)` query pairs.
    ///
    /// Unknown keys are ignored. A key given several times is treated as one
    /// comma-joined value. A key whose joined value is empty adds no
    /// constraint.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut genre: Vec<String> = Vec::new();
        let mut plateforme: Vec<String> = Vec::new();

        for (key, value) in pairs {
            match key.as_ref() {
                FIELD_GENRE => genre.push(value.as_ref().to_string()),
                FIELD_PLATEFORME => plateforme.push(value.as_ref().to_string()),
                _ => {}
            }
        }

        Self {
            genre: constraint(&genre),
            plateforme: constraint(&plateforme),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.plateforme.is_none()
    }

    /// Whether `game` satisfies every constrained field.
    pub fn matches(&self, game: &Game) -> bool {
        overlaps(self.genre.as_deref(), &game.genre)
            && overlaps(self.plateforme.as_deref(), &game.plateforme)
    }
}

fn constraint(raw_values: &[String]) -> Option<Vec<String>> {
    let joined = raw_values.join(",");
    if joined.is_empty() {
        None
    } else {
        Some(split_list(&joined))
    }
}

fn overlaps(wanted: Option<&[String]>, actual: &[String]) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual.iter().any(|value| wanted.contains(value)),
    }
}
