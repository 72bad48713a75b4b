use std::path::PathBuf;

use anyhow::Context;
use quest_config::QuestConfig;
use quest_core::Catalog;

use crate::cli::GlobalFlags;

pub fn load_config() -> anyhow::Result<QuestConfig> {
    QuestConfig::load_with_dotenv().context("failed to load sqlquest configuration")
}

/// Resolve the catalog: `--catalog` wins over `general.catalog_path`, and the
/// bundled puzzles are used when neither is set.
pub fn load_catalog(flags: &GlobalFlags, config: &QuestConfig) -> anyhow::Result<Catalog> {
    let path = flags
        .catalog
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| config.general.catalog_path());

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading catalog file");
            Catalog::from_path(&path)
                .with_context(|| format!("failed to load catalog {}", path.display()))
        }
        None => Catalog::builtin().context("bundled catalog is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(catalog: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            quiet: false,
            catalog: catalog.map(String::from),
        }
    }

    #[test]
    fn falls_back_to_bundled_catalog() {
        let catalog = load_catalog(&flags(None), &QuestConfig::default()).unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn flag_overrides_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.json");
        let builtin = Catalog::builtin().unwrap();
        let first = builtin.get(0).unwrap().clone();
        let single = Catalog::new(vec![first]).unwrap();
        std::fs::write(&path, serde_json::to_string(&single).unwrap()).unwrap();

        let mut config = QuestConfig::default();
        config.general.catalog_path = "/nonexistent/puzzles.toml".into();

        let catalog = load_catalog(&flags(path.to_str()), &config).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_catalog(&flags(Some("/nonexistent/puzzles.toml")), &QuestConfig::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/puzzles.toml"));
    }
}
