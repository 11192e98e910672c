//! Configuration for the bank

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// Bank name
    pub name: String,

    /// Maximum balance any account may hold (none = unlimited)
    pub balance_ceiling: Option<Decimal>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            name: "Banco do Brasil".to_string(),
            balance_ceiling: None,
        }
    }
}
