use quest_db::error::DatabaseError;
use thiserror::Error;

/// Errors from session commands.
///
/// Failed learner queries are not errors here; they become part of the visit
/// state. Only puzzle loading and invalid commands surface as `SessionError`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A puzzle's schema or seed data was rejected while loading its engine.
    #[error("Failed to load puzzle engine: {0}")]
    Engine(#[from] DatabaseError),

    #[error("The puzzle catalog is empty")]
    EmptyCatalog,

    #[error("Puzzle position {position} is out of range (catalog has {total})")]
    OutOfRange { position: usize, total: usize },

    #[error("The explanation unlocks once the puzzle is solved")]
    ExplanationLocked,
}
