//! Domain logic for the game collection service.
//!
//! Everything in this crate is pure: it turns loosely-typed JSON input into
//! typed game records, builds listing filters and computes collection
//! statistics. Storage and HTTP live in `ludotheque-db` and `ludotheque-api`.

pub mod coerce;
pub mod error;
pub mod filter;
pub mod game;
pub mod stats;
pub mod types;
