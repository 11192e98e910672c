//! Deferred basket
//!
//! Adding a product only checks the stock; nothing is taken until the order
//! is placed, at which point every line is checked again.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product and quantity requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketLine {
    /// Product name
    pub product: String,

    /// Units requested
    pub quantity: u32,
}

/// Basket of unreserved lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    lines: Vec<BasketLine>,
}

impl Basket {
    /// Create empty basket
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in the order they were added
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Whether the basket has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units of `product` across all lines
    pub fn quantity_of(&self, product: &str) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.product == product)
            .map(|line| line.quantity)
            .sum()
    }

    pub(crate) fn push(&mut self, product: &str, quantity: u32) {
        self.lines.push(BasketLine {
            product: product.to_string(),
            quantity,
        });
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Order ID (UUIDv7 for time-ordering)
    pub order_id: Uuid,

    /// Units taken per product, in first-seen order
    pub lines: Vec<BasketLine>,

    /// Value of the order at current prices
    pub total: Decimal,
}
