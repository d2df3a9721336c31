//! Configuration module for numcalc.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `NUMCALC_` and use double
//! underscores to separate nested levels:
//! - `NUMCALC_SUM__PRECISION=2` sets `sum.precision`
//! - `NUMCALC_SUM__ON_INVALID_TOKEN=skip` sets `sum.on_invalid_token`
//! - `NUMCALC_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::sum::TokenPolicy;

pub const CONFIG_DIR: &str = ".numcalc";
pub const CONFIG_FILE: &str = "settings.toml";
pub const ENV_PREFIX: &str = "NUMCALC_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Log filtering
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Sum Calculator behaviour
    #[serde(default)]
    pub sum: SumConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for every target (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `numcalc = "debug"`
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SumConfig {
    /// Handling of tokens that are not finite real numbers
    #[serde(default)]
    pub on_invalid_token: TokenPolicy,

    /// Fixed number of decimals for the sum; shortest round-trip when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
            sum: SumConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources.
    ///
    /// `explicit` wins over the workspace lookup. A missing file only
    /// contributes nothing; a malformed one is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        match explicit.map(Path::to_path_buf).or_else(Self::find_workspace_config) {
            Some(path) => {
                tracing::debug!("[config] loading {}", path.display());
                Self::load_from(path)
            }
            None => Self::figment(None).extract().map_err(Box::new),
        }
    }

    /// Load configuration from a specific file plus environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(Some(path.as_ref())).extract().map_err(Box::new)
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        // Double underscore separates nested keys; single underscores stay in field names
        figment.merge(
            Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().replace("__", ".").into()),
        )
    }

    /// Find `.numcalc/settings.toml` searching from the current directory up to root.
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Render the settings as pretty TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
