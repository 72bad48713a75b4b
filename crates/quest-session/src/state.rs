//! Session values.
//!
//! `SessionState` holds the counters that live for the whole session and is
//! replaced wholesale on every transition. `Visit` holds what the learner sees
//! for the current puzzle and is reset on every actual navigation.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use quest_core::ResultSet;

/// Session-wide counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Zero-based catalog position of the current puzzle.
    pub position: usize,
    /// Ids of solved puzzles.
    pub solved: BTreeSet<u32>,
    /// Incorrect but executable submissions.
    pub attempts: u32,
    /// Hidden-to-visible hint transitions.
    pub hints: u32,
}

impl SessionState {
    #[must_use]
    pub fn starting_at(position: usize) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_position(&self, position: usize) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Mark `puzzle_id` solved. Solving the same id again changes nothing.
    #[must_use]
    pub fn with_solved(&self, puzzle_id: u32) -> Self {
        let mut solved = self.solved.clone();
        solved.insert(puzzle_id);
        Self {
            solved,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_attempt(&self) -> Self {
        Self {
            attempts: self.attempts.saturating_add(1),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_hint(&self) -> Self {
        Self {
            hints: self.hints.saturating_add(1),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn is_solved(&self, puzzle_id: u32) -> bool {
        self.solved.contains(&puzzle_id)
    }
}

/// Display state for one visit to one puzzle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Text of the last submission.
    pub query: String,
    /// Rows from the last query that executed.
    pub result: Option<ResultSet>,
    /// Message from the last submission, if it failed to execute.
    pub error: Option<String>,
    pub hint_visible: bool,
    pub explanation_visible: bool,
    /// Whether a correct answer was submitted during this visit.
    pub solved_here: bool,
}

/// Where the current visit stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for a submission.
    Ready,
    /// A correct answer is on screen and the explanation has not been opened.
    Correct,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Correct => "correct",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
