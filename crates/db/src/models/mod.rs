//! Database row structs.
//!
//! Rows convert into the domain types of `ludotheque_core`.

pub mod game;
