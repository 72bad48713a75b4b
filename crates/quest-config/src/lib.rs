//! # quest-config
//!
//! Layered configuration loading for SQL Quest using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SQLQUEST_*` prefix, `__` as separator)
//! 2. Project-level `.sqlquest/config.toml`
//! 3. User-level `~/.config/sqlquest/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SQLQUEST_GENERAL__CATALOG_PATH` -> `general.catalog_path`,
//! `SQLQUEST_DISPLAY__MAX_ROWS` -> `display.max_rows`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use quest_config::QuestConfig;
//!
//! let config = QuestConfig::load_with_dotenv().expect("config");
//! if let Some(path) = config.general.catalog_path() {
//!     println!("catalog: {}", path.display());
//! }
//! ```

mod display;
mod error;
mod general;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "SQLQUEST_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuestConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl QuestConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`QuestConfig::load_with_dotenv`] if you need `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sqlquest/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.max_rows == 0 {
            return Err(ConfigError::InvalidValue {
                field: "display.max_rows".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sqlquest").join("config.toml"))
    }
}
