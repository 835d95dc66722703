use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::AppConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<AppConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Before `init_config` this is the built-in
/// default.
pub fn get_config() -> Arc<AppConfig> {
    match CONFIG.get() {
        Some(config) => config.load_full(),
        None => Arc::new(AppConfig::default()),
    }
}

/// Initialize the global configuration
///
/// Loads `path`, or `octo-dashboard.toml` in the current directory when no
/// path is given. A second call replaces the stored configuration.
pub fn init_config(path: Option<&str>) -> Result<Arc<AppConfig>> {
    let config = AppConfig::load(path)?;
    Ok(init_config_from(config))
}

/// Install an already built configuration
pub fn init_config_from(config: AppConfig) -> Arc<AppConfig> {
    let config = Arc::new(config);
    match CONFIG.get() {
        Some(current) => current.store(config.clone()),
        None => {
            let slot = CONFIG.get_or_init(|| ArcSwap::new(config.clone()));
            slot.store(config.clone());
        }
    }
    config
}
