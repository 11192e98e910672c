//! Driver configuration
//!
//! One value composing the ambient settings and every system's settings.
//! It is loaded once in `main` and handed to each scenario by reference.

use bank::BankConfig;
use entity_core::{load_toml, Config};
use library::LibraryConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use store::StoreConfig;

/// Demo configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Logging and metrics
    pub core: Config,

    /// Bank settings
    pub bank: BankConfig,

    /// Library settings
    pub library: LibraryConfig,

    /// Store settings
    pub store: StoreConfig,
}

impl DemoConfig {
    /// Load from `path` (or defaults), then apply environment overrides
    pub fn load(path: Option<&Path>) -> entity_core::Result<Self> {
        let mut config = match path {
            Some(path) => load_toml(path)?,
            None => DemoConfig::default(),
        };
        config.core.apply_env()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[bank]\nbalance_ceiling = \"5000\"\n\n[store]\nshipping_rate_per_kg = \"7.5\""
        )
        .unwrap();

        let config: DemoConfig = load_toml(file.path()).unwrap();

        assert_eq!(config.bank.balance_ceiling, Some(dec!(5000)));
        assert_eq!(config.bank.name, BankConfig::default().name);
        assert_eq!(config.store.shipping_rate_per_kg, dec!(7.5));
        assert_eq!(config.store.min_address_len, 10);
        assert_eq!(config.library, LibraryConfig::default());
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nmin_address_len = \"ten\"").unwrap();

        let err = load_toml::<DemoConfig>(file.path()).unwrap_err();
        assert_eq!(err.kind(), entity_core::ErrorKind::Config);
    }
}
