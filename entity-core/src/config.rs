//! Configuration shared by every system
//!
//! There is no global configuration instance. The driver builds one value,
//! owns it, and passes references to whatever needs it.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

/// Ambient configuration (logging, metrics)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Default `tracing` filter directive (overridden by `RUST_LOG`)
    pub log_filter: String,

    /// Emit JSON log lines
    pub log_json: bool,

    /// Record operation counters
    pub metrics_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "registry-kata".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_filter: "info".to_string(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        load_toml(path)
    }

    /// Load defaults, then apply environment overrides
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `KATA_*` environment overrides in place
    pub fn apply_env(&mut self) -> crate::Result<()> {
        if let Ok(filter) = std::env::var("KATA_LOG") {
            self.log_filter = filter;
        }

        if let Ok(raw) = std::env::var("KATA_LOG_JSON") {
            self.log_json = parse_flag("KATA_LOG_JSON", &raw)?;
        }

        if let Ok(raw) = std::env::var("KATA_METRICS") {
            self.metrics_enabled = parse_flag("KATA_METRICS", &raw)?;
        }

        Ok(())
    }
}

/// Read and parse a TOML file into any configuration type
pub fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> crate::Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        crate::Error::Config(format!("Failed to parse {}: {}", path.display(), e))
    })
}

fn parse_flag(name: &str, raw: &str) -> crate::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(crate::Error::Config(format!(
            "{} must be a boolean, got {:?}",
            name, other
        ))),
    }
}
