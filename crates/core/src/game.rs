//! Game records and the rules that turn raw client payloads into them.
//!
//! Three steps sit between an HTTP body and the store:
//!
//! 1. [`validate_game_payload`] gates creation (a record with a title).
//! 2. [`normalize_game`] coerces every field into its typed form.
//! 3. [`build_game_changes`] restricts an update to the allow-listed fields
//!    and reuses the normalizer for coercion, so `date_ajout` can never be
//!    part of an update.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::{is_truthy, to_display_string, to_number, to_string_list};
use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

pub const FIELD_TITRE: &str = "titre";
pub const FIELD_GENRE: &str = "genre";
pub const FIELD_PLATEFORME: &str = "plateforme";
pub const FIELD_EDITEUR: &str = "editeur";
pub const FIELD_DEVELOPPEUR: &str = "developpeur";
pub const FIELD_ANNEE_SORTIE: &str = "annee_sortie";
pub const FIELD_METACRITIC_SCORE: &str = "metacritic_score";
pub const FIELD_TEMPS_JEU_HEURES: &str = "temps_jeu_heures";
pub const FIELD_TERMINE: &str = "termine";
pub const FIELD_FAVORIS: &str = "favoris";

/// Fields a client may change on an existing game.
pub const UPDATABLE_FIELDS: [&str; 10] = [
    FIELD_TITRE,
    FIELD_GENRE,
    FIELD_PLATEFORME,
    FIELD_EDITEUR,
    FIELD_DEVELOPPEUR,
    FIELD_ANNEE_SORTIE,
    FIELD_METACRITIC_SCORE,
    FIELD_TEMPS_JEU_HEURES,
    FIELD_TERMINE,
    FIELD_FAVORIS,
];

pub const MSG_MISSING_PAYLOAD: &str = "missing payload";
pub const MSG_TITLE_REQUIRED: &str = "title required";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A stored game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
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

/// A normalized game that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
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

impl NewGame {
    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: DbId) -> Game {
        Game {
            id,
            titre: self.titre,
            genre: self.genre,
            plateforme: self.plateforme,
            editeur: self.editeur,
            developpeur: self.developpeur,
            annee_sortie: self.annee_sortie,
            metacritic_score: self.metacritic_score,
            temps_jeu_heures: self.temps_jeu_heures,
            termine: self.termine,
            favoris: self.favoris,
            date_ajout: self.date_ajout,
            date_modification: self.date_modification,
        }
    }
}

/// A partial update. `None` leaves the stored value untouched.
///
/// Nullable numeric fields use `Option<Option<f64>>`: `Some(None)` clears
/// the stored value. There is no `date_ajout`: creation time is immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameChanges {
    pub titre: Option<String>,
    pub genre: Option<Vec<String>>,
    pub plateforme: Option<Vec<String>>,
    pub editeur: Option<String>,
    pub developpeur: Option<String>,
    pub annee_sortie: Option<Option<f64>>,
    pub metacritic_score: Option<Option<f64>>,
    pub temps_jeu_heures: Option<Option<f64>>,
    pub termine: Option<bool>,
    pub favoris: Option<bool>,
}

impl GameChanges {
    /// The change set behind "mark as favorite".
    pub fn favorite() -> Self {
        Self {
            favoris: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the changes into `game`. Timestamps are left to the caller.
    pub fn apply_to(&self, game: &mut Game) {
        if let Some(titre) = &self.titre {
            game.titre.clone_from(titre);
        }
        if let Some(genre) = &self.genre {
            game.genre.clone_from(genre);
        }
        if let Some(plateforme) = &self.plateforme {
            game.plateforme.clone_from(plateforme);
        }
        if let Some(editeur) = &self.editeur {
            game.editeur.clone_from(editeur);
        }
        if let Some(developpeur) = &self.developpeur {
            game.developpeur.clone_from(developpeur);
        }
        if let Some(annee_sortie) = self.annee_sortie {
            game.annee_sortie = annee_sortie;
        }
        if let Some(metacritic_score) = self.metacritic_score {
            game.metacritic_score = metacritic_score;
        }
        if let Some(temps_jeu_heures) = self.temps_jeu_heures {
            game.temps_jeu_heures = temps_jeu_heures;
        }
        if let Some(termine) = self.termine {
            game.termine = termine;
        }
        if let Some(favoris) = self.favoris {
            game.favoris = favoris;
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check that a raw payload may be used to create a game.
///
/// Only the title is checked here; every other field is optional and gets
/// coerced by [`normalize_game`].
pub fn validate_game_payload(payload: &Value) -> Result<(), CoreError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| CoreError::Validation(MSG_MISSING_PAYLOAD.to_string()))?;

    match obj.get(FIELD_TITRE) {
        Some(Value::String(titre)) if !titre.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(MSG_TITLE_REQUIRED.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Coerce a raw payload into a fully-typed game stamped with `now`.
///
/// Never fails: fields that are missing or cannot be coerced take their
/// default (empty text, empty list, `None`, `false`). A non-object payload
/// yields an all-default game.
pub fn normalize_game(payload: &Value, now: Timestamp) -> NewGame {
    let field = |name: &str| payload.get(name);

    let titre = field(FIELD_TITRE)
        .filter(|v| is_truthy(v))
        .map(|v| to_display_string(v).trim().to_string())
        .unwrap_or_default();

    NewGame {
        titre,
        genre: field(FIELD_GENRE).map(to_string_list).unwrap_or_default(),
        plateforme: field(FIELD_PLATEFORME)
            .map(to_string_list)
            .unwrap_or_default(),
        editeur: text_or_empty(field(FIELD_EDITEUR)),
        developpeur: text_or_empty(field(FIELD_DEVELOPPEUR)),
        annee_sortie: optional_number(field(FIELD_ANNEE_SORTIE)),
        metacritic_score: optional_number(field(FIELD_METACRITIC_SCORE)),
        temps_jeu_heures: optional_number(field(FIELD_TEMPS_JEU_HEURES)),
        termine: field(FIELD_TERMINE).is_some_and(completion_flag),
        favoris: field(FIELD_FAVORIS).is_some_and(is_truthy),
        date_ajout: now,
        date_modification: now,
    }
}

fn text_or_empty(value: Option<&Value>) -> String {
    match value {
        Some(v) if is_truthy(v) => to_display_string(v),
        _ => String::new(),
    }
}

/// Absent, `null` and `""` mean "no value"; anything else must coerce to a
/// finite number or it is dropped.
fn optional_number(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(v) => to_number(v),
    }
}

/// `termine` accepts the strings "true" and "1" (any case) as true. Unlike
/// `favoris`, other non-empty strings such as "yes" are false.
fn completion_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => {
            let s = s.to_lowercase();
            s == "true" || s == "1"
        }
        other => is_truthy(other),
    }
}

// ---------------------------------------------------------------------------
// Update merge policy
// ---------------------------------------------------------------------------

/// Build the change set for updating an existing game.
///
/// Keys outside [`UPDATABLE_FIELDS`] are ignored. Each present key (an
/// explicit `null` counts as present) is coerced the same way creation
/// coerces it; absent keys are left out of the change set. A present title
/// must still be non-blank after coercion.
pub fn build_game_changes(payload: &Value) -> Result<GameChanges, CoreError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| CoreError::Validation(MSG_MISSING_PAYLOAD.to_string()))?;

    let present: Vec<&str> = UPDATABLE_FIELDS
        .into_iter()
        .filter(|key| obj.contains_key(*key))
        .collect();
    let has = |key: &str| present.contains(&key);

    let mut allowed: Map<String, Value> = present
        .iter()
        .filter_map(|&key| obj.get(key).map(|v| (key.to_string(), v.clone())))
        .collect();

    // The normalizer expects a title; an update without one gets a blank
    // placeholder that is never written.
    allowed
        .entry(FIELD_TITRE)
        .or_insert_with(|| Value::String(String::new()));

    // Timestamps from the normalizer are discarded: the store stamps
    // `date_modification` and `date_ajout` is never updated.
    let NewGame {
        titre,
        genre,
        plateforme,
        editeur,
        developpeur,
        annee_sortie,
        metacritic_score,
        temps_jeu_heures,
        termine,
        favoris,
        ..
    } = normalize_game(&Value::Object(allowed), Timestamp::default());

    if has(FIELD_TITRE) && titre.is_empty() {
        return Err(CoreError::Validation(MSG_TITLE_REQUIRED.to_string()));
    }

    Ok(GameChanges {
        titre: has(FIELD_TITRE).then_some(titre),
        genre: has(FIELD_GENRE).then_some(genre),
        plateforme: has(FIELD_PLATEFORME).then_some(plateforme),
        editeur: has(FIELD_EDITEUR).then_some(editeur),
        developpeur: has(FIELD_DEVELOPPEUR).then_some(developpeur),
        annee_sortie: has(FIELD_ANNEE_SORTIE).then_some(annee_sortie),
        metacritic_score: has(FIELD_METACRITIC_SCORE).then_some(metacritic_score),
        temps_jeu_heures: has(FIELD_TEMPS_JEU_HEURES).then_some(temps_jeu_heures),
        termine: has(FIELD_TERMINE).then_some(termine),
        favoris: has(FIELD_FAVORIS).then_some(favoris),
    })
}
