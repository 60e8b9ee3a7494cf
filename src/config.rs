//! Demo settings: colour output and the default log filter.
//!
//! ```toml
//! color = false
//! log_filter = "lld_patterns=debug"
//! ```

use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming an optional TOML settings file.
pub const CONFIG_ENV: &str = "LLD_DEMO_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub color: bool,
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "info".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| PatternError::config(path, err.to_string()))?;
        Self::from_toml(&content).map_err(|err| PatternError::config(path, err.message()))
    }

    /// Reads the file named by `LLD_DEMO_CONFIG`, or falls back to defaults
    /// when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
