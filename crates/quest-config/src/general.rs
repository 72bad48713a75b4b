//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Puzzle catalog file (TOML or JSON). Empty means the bundled catalog.
    #[serde(default)]
    pub catalog_path: String,

    /// Puzzle id to open first. `0` opens the first puzzle in the catalog.
    #[serde(default)]
    pub start_puzzle: u32,
}

impl GeneralConfig {
    /// The configured catalog file, if any.
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let trimmed = self.catalog_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    /// The configured starting puzzle id, if any.
    #[must_use]
    pub const fn start_puzzle(&self) -> Option<u32> {
        match self.start_puzzle {
            0 => None,
            id => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.catalog_path().is_none());
        assert!(config.start_puzzle().is_none());
    }

    #[test]
    fn blank_catalog_path_means_builtin() {
        let config = GeneralConfig {
            catalog_path: "   ".into(),
            start_puzzle: 3,
        };
        assert!(config.catalog_path().is_none());
        assert_eq!(config.start_puzzle(), Some(3));
    }
}
