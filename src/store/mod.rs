pub mod sqlite;

pub use sqlite::SqliteStore;

use std::path::PathBuf;

use crate::model::{Record, RecordFields};

/// Error type for record store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("todo not found: {0}")]
    NotFound(i64),
    #[error("todo title must not be empty")]
    EmptyTitle,
    #[error("todo {field} is longer than {limit} characters")]
    TooLong { field: &'static str, limit: usize },
    #[error("could not create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Durable keyed collection of todo records.
///
/// Every call is synchronous. Callers treat any error as fatal.
pub trait RecordStore {
    /// All records in primary-key order
    fn list_all(&self) -> Result<Vec<Record>, StoreError>;

    /// Fetch a single record; `NotFound` if the id does not exist
    fn get(&self, id: i64) -> Result<Record, StoreError>;

    /// Insert a record, stamping `created_at` with the current time. Returns the new id.
    fn create(&mut self, fields: &RecordFields) -> Result<i64, StoreError>;

    /// Overwrite title, content and completed; `NotFound` if the id does not exist
    fn update(&mut self, id: i64, fields: &RecordFields) -> Result<(), StoreError>;

    /// Remove a record; `NotFound` if the id does not exist
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;
}
