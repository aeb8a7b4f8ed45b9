//! Application settings loaded from `config.toml`.
//!
//! Every setting has a default, so a missing file is not an error. A file that
//! exists but does not parse is.

use crate::{
    cache::DEFAULT_VEHICLE_CACHE_TTL,
    core::profile::DEFAULT_COMPANY_NAME,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tracing::{debug, info};

/// Environment variable that overrides the settings file location.
pub const CONFIG_PATH_ENV: &str = "DEALER_LEDGER_CONFIG";

/// Settings file used when [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Company name given to the dealer profile when none exists
    pub default_company_name: String,
    /// How long a cached vehicle list may be served, in seconds
    pub vehicle_cache_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_company_name: DEFAULT_COMPANY_NAME.to_string(),
            vehicle_cache_ttl_secs: DEFAULT_VEHICLE_CACHE_TTL.as_secs(),
        }
    }
}

impl AppConfig {
    /// Cache staleness bound as a `Duration`.
    #[must_use]
    pub const fn vehicle_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.vehicle_cache_ttl_secs)
    }
}

/// Parses settings from TOML text.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from `path`, returning defaults when the file does not exist.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        info!(?path, "No settings file found, using defaults");
        return Ok(AppConfig::default());
    }

    debug!(?path, "Loading settings");
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_config(&contents)
}

/// Loads settings from `$DEALER_LEDGER_CONFIG`, or `./config.toml`.
pub fn load_default_config() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}
