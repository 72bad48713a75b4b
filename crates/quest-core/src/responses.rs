//! CLI response types returned by `sqlquest` commands.
//!
//! These structs define the presentation boundary: everything the play view,
//! `sqlquest show`, `sqlquest list`, and `sqlquest check` render.

use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, Outcome};
use crate::puzzle::{Puzzle, TableSchema};
use crate::row::Row;

/// One puzzle as presented to the learner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PuzzleView {
    /// One-based position in the catalog.
    pub position: usize,
    pub total: usize,
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub tables: Vec<TableSchema>,
    pub question: String,
    pub hint: Option<String>,
    pub explanation: Option<String>,
    pub solved: bool,
}

impl PuzzleView {
    /// Build a view of `puzzle` at zero-based `index`, revealing the hint and
    /// explanation only when asked to.
    #[must_use]
    pub fn new(
        puzzle: &Puzzle,
        index: usize,
        total: usize,
        show_hint: bool,
        show_explanation: bool,
        solved: bool,
    ) -> Self {
        Self {
            position: index + 1,
            total,
            id: puzzle.id,
            title: puzzle.title.clone(),
            difficulty: puzzle.difficulty,
            description: puzzle.description.clone(),
            tables: puzzle.table_schema.clone(),
            question: puzzle.question.clone(),
            hint: show_hint.then(|| puzzle.hint.clone()),
            explanation: show_explanation.then(|| puzzle.explanation.clone()),
            solved,
        }
    }
}

/// Response from `sqlquest list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PuzzleSummary {
    pub position: usize,
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub solved: bool,
}

impl PuzzleSummary {
    #[must_use]
    pub fn new(puzzle: &Puzzle, index: usize, solved: bool) -> Self {
        Self {
            position: index + 1,
            id: puzzle.id,
            title: puzzle.title.clone(),
            difficulty: puzzle.difficulty,
            solved,
        }
    }
}

/// Result of one query submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionResponse {
    pub puzzle_id: u32,
    pub outcome: Outcome,
    /// Rows returned by the query; `None` when execution failed.
    pub rows: Option<Vec<Row>>,
    /// Engine error message; `None` when execution succeeded.
    pub error: Option<String>,
    /// Whether this puzzle is solved once the submission has been judged.
    pub solved: bool,
}

impl SubmissionResponse {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.outcome.is_correct()
    }
}

/// Session aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressResponse {
    pub solved: usize,
    pub total: usize,
    pub attempts: u32,
    pub hints: u32,
    /// One-based position of the current puzzle.
    pub position: usize,
    pub percent: f64,
}

impl ProgressResponse {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(solved: usize, total: usize, attempts: u32, hints: u32, position: usize) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            solved as f64 / total as f64 * 100.0
        };
        Self {
            solved,
            total,
            attempts,
            hints,
            position,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn view_hides_hint_and_explanation_by_default() {
        let catalog = Catalog::builtin().unwrap();
        let puzzle = catalog.get(0).unwrap();
        let view = PuzzleView::new(puzzle, 0, catalog.len(), false, false, false);
        assert_eq!(view.position, 1);
        assert_eq!(view.total, 10);
        assert!(view.hint.is_none());
        assert!(view.explanation.is_none());

        let revealed = PuzzleView::new(puzzle, 0, catalog.len(), true, true, true);
        assert_eq!(revealed.hint.as_deref(), Some(puzzle.hint.as_str()));
        assert_eq!(
            revealed.explanation.as_deref(),
            Some("SELECT name FROM adventurers WHERE level >= 5")
        );
    }

    #[test]
    fn progress_percent() {
        let progress = ProgressResponse::new(3, 10, 4, 1, 5);
        assert!((progress.percent - 30.0).abs() < f64::EPSILON);
        assert!(ProgressResponse::new(0, 0, 0, 0, 1).percent.abs() < f64::EPSILON);
    }

    #[test]
    fn submission_serializes_outcome_snake_case() {
        let response = SubmissionResponse {
            puzzle_id: 1,
            outcome: Outcome::ExecutionError,
            rows: None,
            error: Some("no such table: adventurer".into()),
            solved: true,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["outcome"], "execution_error");
        assert!(json["rows"].is_null());
        assert_eq!(json["solved"], true);
        assert!(!response.is_correct());
    }
}
