//! The puzzle catalog.
//!
//! An ordered, read-only collection of puzzles. The bundled catalog is
//! embedded at compile time from `catalog/puzzles.toml`; custom catalogs can
//! be loaded from TOML or JSON files with the same shape.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::puzzle::Puzzle;

const BUILTIN_CATALOG: &str = include_str!("../catalog/puzzles.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// The ten bundled adventurer-guild puzzles.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` only if the embedded content is malformed.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Build a catalog from puzzles already in memory.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the puzzles do not form a valid catalog.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, CoreError> {
        let catalog = Self { puzzles };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a TOML catalog (`[[puzzles]]` array of tables).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Parse` for malformed TOML, `CoreError::Validation`
    /// for structurally invalid content.
    pub fn from_toml_str(s: &str) -> Result<Self, CoreError> {
        let catalog: Self = toml::from_str(s).map_err(|e| CoreError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a JSON catalog (`{"puzzles": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Parse` for malformed JSON, `CoreError::Validation`
    /// for structurally invalid content.
    pub fn from_json_str(s: &str) -> Result<Self, CoreError> {
        let catalog: Self =
            serde_json::from_str(s).map_err(|e| CoreError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file. `.json` files are parsed as JSON, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Io` if the file cannot be read, otherwise as
    /// [`Catalog::from_toml_str`] / [`Catalog::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.puzzles.is_empty() {
            return Err(CoreError::Validation("catalog has no puzzles".into()));
        }

        let mut seen = HashSet::with_capacity(self.puzzles.len());
        for puzzle in &self.puzzles {
            if !seen.insert(puzzle.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate puzzle id {}",
                    puzzle.id
                )));
            }
            if puzzle.table_schema.is_empty() {
                return Err(CoreError::Validation(format!(
                    "puzzle {} defines no tables",
                    puzzle.id
                )));
            }
            if let Some(table) = puzzle.table_schema.iter().find(|t| t.columns.is_empty()) {
                return Err(CoreError::Validation(format!(
                    "puzzle {} table '{}' has no columns",
                    puzzle.id, table.name
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always `false` for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Puzzle at a zero-based catalog position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Puzzle> {
        self.puzzles.get(position)
    }

    /// Catalog position of the puzzle with identity `id`.
    #[must_use]
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.puzzles.iter().position(|p| p.id == id)
    }

    /// Look up a puzzle by identity.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::PuzzleNotFound` if no puzzle has this id.
    pub fn by_id(&self, id: u32) -> Result<&Puzzle, CoreError> {
        self.puzzles
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::PuzzleNotFound { id })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }
}
