//! Play-view rendering configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_max_rows() -> usize {
    50
}

const fn default_show_schema() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Result rows rendered after a submission. Checking always uses every row.
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,

    /// Render table schemas whenever a puzzle loads.
    #[serde(default = "default_show_schema")]
    pub show_schema: bool,

    /// REPL history file. Empty disables history.
    #[serde(default)]
    pub history_file: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
            show_schema: default_show_schema(),
            history_file: String::new(),
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn history_path(&self) -> Option<PathBuf> {
        let trimmed = self.history_file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
