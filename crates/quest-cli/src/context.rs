use quest_config::QuestConfig;
use quest_core::Catalog;

/// Resources shared by every command, loaded once at startup.
pub struct AppContext {
    pub config: QuestConfig,
    pub catalog: Catalog,
}

impl AppContext {
    #[must_use]
    pub const fn new(config: QuestConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }
}
