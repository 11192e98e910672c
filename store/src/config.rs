//! Configuration for the store

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store name
    pub name: String,

    /// Shipping charged per kilogram of cart weight
    pub shipping_rate_per_kg: Decimal,

    /// Minimum length of a delivery address
    pub min_address_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "Minha Loja Online".to_string(),
            shipping_rate_per_kg: Decimal::from(5),
            min_address_len: 10,
        }
    }
}
