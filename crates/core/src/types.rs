/// Record identifiers are assigned by the store (BIGSERIAL in PostgreSQL).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
