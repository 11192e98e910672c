//! Configuration for the library

use serde::{Deserialize, Serialize};

/// Library configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Library name
    pub name: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: "Biblioteca Municipal".to_string(),
        }
    }
}
