//! Cross-cutting error types for SQL Quest.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `SessionError`) are defined in
//! their respective crates and converge into `anyhow` in `quest-cli`.

use thiserror::Error;

/// Errors that can be raised by any SQL Quest crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Puzzle lookup returned no result.
    #[error("Puzzle not found: {id}")]
    PuzzleNotFound { id: u32 },

    /// Catalog content failed validation (empty catalog, duplicate ids, empty tables).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catalog content could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
