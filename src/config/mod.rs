//! Settings for nua-deploy
//!
//! Resolution order for every target field:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NUA_*)
//! 3. Settings file (`nua-deploy.toml`, `--config` or `NUA_DEPLOY_CONFIG`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning,
    ENV_NUA_ENV, ENV_SETTINGS_PATH, SETTINGS_FILE_NAME,
};
pub use types::{AppRecord, AppSpec, CatalogSection, Settings};
