//! The puzzle session controller.

use quest_core::checker;
use quest_core::enums::Outcome;
use quest_core::responses::{ProgressResponse, PuzzleSummary, PuzzleView, SubmissionResponse};
use quest_core::{Catalog, Puzzle};
use quest_db::QuestDb;

use crate::error::SessionError;
use crate::state::{Phase, SessionState, Visit};

/// One learner's walk through a catalog.
///
/// Owns the catalog, the engine for the current puzzle, the session counters,
/// and the current visit. Every command runs to completion before the next
/// one is accepted.
pub struct Session {
    catalog: Catalog,
    engine: QuestDb,
    state: SessionState,
    visit: Visit,
}

impl Session {
    /// Load the puzzle at zero-based `position` and start a session there.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCatalog`, `SessionError::OutOfRange`, or
    /// `SessionError::Engine` if the puzzle content cannot be loaded.
    pub async fn start(catalog: Catalog, position: usize) -> Result<Self, SessionError> {
        if catalog.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        let engine = Self::load(&catalog, position).await?;
        Ok(Self {
            catalog,
            engine,
            state: SessionState::starting_at(position),
            visit: Visit::default(),
        })
    }

    async fn load(catalog: &Catalog, position: usize) -> Result<QuestDb, SessionError> {
        let puzzle = catalog.get(position).ok_or(SessionError::OutOfRange {
            position,
            total: catalog.len(),
        })?;
        Ok(QuestDb::for_puzzle(puzzle).await?)
    }

    /// Run `sql` against the current puzzle and judge the result.
    ///
    /// Execution failures are reported in the response and leave every
    /// counter alone, as well as the rows from the last successful query.
    pub async fn submit(&mut self, sql: &str) -> SubmissionResponse {
        let puzzle_id = self.current().id;
        self.visit.query = sql.to_string();

        let rows = match self.engine.run_query(sql).await {
            Ok(rows) => rows,
            Err(error) => {
                let message = error.user_message();
                tracing::debug!(puzzle_id, %message, "query failed");
                self.visit.error = Some(message.clone());
                return SubmissionResponse {
                    puzzle_id,
                    outcome: Outcome::ExecutionError,
                    rows: None,
                    error: Some(message),
                    solved: self.state.is_solved(puzzle_id),
                };
            }
        };

        let verdict = checker::check(&rows, &self.current().expected_result);
        let outcome = if verdict.is_correct() {
            self.state = self.state.with_solved(puzzle_id);
            self.visit.solved_here = true;
            tracing::info!(puzzle_id, solved = self.state.solved.len(), "puzzle solved");
            Outcome::Correct
        } else {
            self.state = self.state.with_attempt();
            tracing::debug!(puzzle_id, ?verdict, "answer not accepted");
            Outcome::Incorrect
        };

        self.visit.error = None;
        self.visit.result = Some(rows.clone());
        SubmissionResponse {
            puzzle_id,
            outcome,
            rows: Some(rows),
            error: None,
            solved: self.state.is_solved(puzzle_id),
        }
    }

    /// Flip hint visibility and return the new visibility.
    ///
    /// Only the hidden-to-visible transition counts as a hint used.
    pub fn toggle_hint(&mut self) -> bool {
        self.visit.hint_visible = !self.visit.hint_visible;
        if self.visit.hint_visible {
            self.state = self.state.with_hint();
        }
        self.visit.hint_visible
    }

    /// Show the reference answer for the current puzzle.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ExplanationLocked` until a correct answer has
    /// been submitted during this visit.
    pub fn reveal_explanation(&mut self) -> Result<&str, SessionError> {
        if !self.visit.solved_here {
            return Err(SessionError::ExplanationLocked);
        }
        self.visit.explanation_visible = true;
        Ok(&self.current().explanation)
    }

    /// Move to the next puzzle. Returns `false` when already on the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Engine` if the next puzzle cannot be loaded.
    pub async fn next(&mut self) -> Result<bool, SessionError> {
        let target = self.state.position + 1;
        if target >= self.catalog.len() {
            return Ok(false);
        }
        self.go_to(target).await?;
        Ok(true)
    }

    /// Move to the previous puzzle. Returns `false` when already on the first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Engine` if the previous puzzle cannot be loaded.
    pub async fn previous(&mut self) -> Result<bool, SessionError> {
        let Some(target) = self.state.position.checked_sub(1) else {
            return Ok(false);
        };
        self.go_to(target).await?;
        Ok(true)
    }

    /// Jump to zero-based `position`, with a fresh engine and a fresh visit.
    ///
    /// On failure the session stays on the current puzzle.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` or `SessionError::Engine`.
    pub async fn go_to(&mut self, position: usize) -> Result<(), SessionError> {
        let engine = Self::load(&self.catalog, position).await?;
        self.engine = engine;
        self.state = self.state.with_position(position);
        self.visit = Visit::default();
        tracing::info!(position, puzzle_id = self.current().id, "moved to puzzle");
        Ok(())
    }

    /// The puzzle being played.
    #[must_use]
    pub fn current(&self) -> &Puzzle {
        // position is only ever set to a value that loaded successfully
        &self.catalog.puzzles()[self.state.position]
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn visit(&self) -> &Visit {
        &self.visit
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.visit.solved_here && !self.visit.explanation_visible {
            Phase::Correct
        } else {
            Phase::Ready
        }
    }

    /// The current puzzle as the learner should see it right now.
    #[must_use]
    pub fn view(&self) -> PuzzleView {
        let puzzle = self.current();
        PuzzleView::new(
            puzzle,
            self.state.position,
            self.catalog.len(),
            self.visit.hint_visible,
            self.visit.explanation_visible,
            self.state.is_solved(puzzle.id),
        )
    }

    #[must_use]
    pub fn progress(&self) -> ProgressResponse {
        ProgressResponse::new(
            self.state.solved.len(),
            self.catalog.len(),
            self.state.attempts,
            self.state.hints,
            self.state.position + 1,
        )
    }

    /// Every puzzle in catalog order, with its solved flag.
    #[must_use]
    pub fn summaries(&self) -> Vec<PuzzleSummary> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(index, puzzle)| {
                PuzzleSummary::new(puzzle, index, self.state.is_solved(puzzle.id))
            })
            .collect()
    }
}
