//! Database error types for quest-db.

use thiserror::Error;

/// Errors from engine operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A table from the puzzle schema could not be created.
    #[error("Schema failed for table {table}: {message}")]
    Schema { table: String, message: String },

    /// The puzzle seed statements were rejected.
    #[error("Seed failed for puzzle {puzzle_id}: {message}")]
    Seed { puzzle_id: u32, message: String },

    /// A submitted query failed before producing rows.
    #[error("Query failed: {0}")]
    Query(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// The message shown to the learner for a failed submission.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Query(message) => message.clone(),
            Self::LibSql(error) => error.to_string(),
            other => other.to_string(),
        }
    }
}
