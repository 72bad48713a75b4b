//! # quest-session
//!
//! Sequences puzzles for one learner. A [`Session`] owns a fresh engine for
//! the puzzle on screen, the session counters (solved, attempts, hints), and
//! the per-visit display state. Commands are the ones a learner can issue:
//! submit a query, toggle the hint, reveal the explanation, and navigate.
//!
//! A visit moves between two phases: [`Phase::Ready`] and, after a correct
//! answer, [`Phase::Correct`] until the explanation is opened or the learner
//! moves on.

pub mod error;
mod session;
pub mod state;

pub use error::SessionError;
pub use session::Session;
pub use state::{Phase, SessionState, Visit};
