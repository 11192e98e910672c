//! Reserving shopping cart
//!
//! Stock is taken from the product when a line is added and put back when
//! the line is removed or the cart cleared. The cart itself only does the
//! arithmetic; stock movements go through [`Store`](crate::Store).

use entity_core::{Error, Percentage, Result};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product in a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product name
    pub product: String,

    /// Unit price when the first unit was reserved
    pub unit_price: Decimal,

    /// Unit weight in kilograms
    pub unit_weight_kg: Decimal,

    /// Units reserved
    pub quantity: u32,
}

impl CartLine {
    /// Price of all units
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Weight of all units
    pub fn line_weight(&self) -> Decimal {
        self.unit_weight_kg * Decimal::from(self.quantity)
    }
}

/// Shopping cart with reserved stock
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    lines: IndexMap<String, CartLine>,
    discount_rate: Percentage,
    shipping_rate_per_kg: Decimal,
}

impl Cart {
    pub(crate) fn new(shipping_rate_per_kg: Decimal) -> Self {
        Self {
            lines: IndexMap::new(),
            discount_rate: Percentage::ZERO,
            shipping_rate_per_kg,
        }
    }

    /// Lines in the order products were first added
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &CartLine> + '_ {
        self.lines.values()
    }

    /// Line for a product
    pub fn line(&self, product: &str) -> Option<&CartLine> {
        self.lines.get(product)
    }

    /// Whether the cart has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals
    pub fn subtotal(&self) -> Decimal {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// Total weight in kilograms
    pub fn total_weight(&self) -> Decimal {
        self.lines.values().map(CartLine::line_weight).sum()
    }

    /// Shipping for the current weight
    pub fn shipping(&self) -> Decimal {
        self.total_weight() * self.shipping_rate_per_kg
    }

    /// Set the discount, a percentage of the subtotal
    pub fn apply_discount(&mut self, rate: Percentage) {
        self.discount_rate = rate;
    }

    /// Discount rate in effect
    pub fn discount_rate(&self) -> Percentage {
        self.discount_rate
    }

    /// Discount on the current subtotal
    pub fn discount(&self) -> Decimal {
        self.discount_rate.of(self.subtotal())
    }

    /// Amount due
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.shipping() - self.discount()
    }

    /// Check that `quantity` more units of `product` fit on its line
    pub(crate) fn check_reserve(&self, product: &str, quantity: u32) -> Result<()> {
        self.quantity_after_reserve(product, quantity).map(|_| ())
    }

    pub(crate) fn reserve(&mut self, product: &crate::Product, quantity: u32) -> Result<()> {
        let total = self.quantity_after_reserve(product.name(), quantity)?;
        self.lines
            .entry(product.name().to_string())
            .and_modify(|line| line.quantity = total)
            .or_insert_with(|| CartLine {
                product: product.name().to_string(),
                unit_price: product.price(),
                unit_weight_kg: product.weight_kg(),
                quantity,
            });
        Ok(())
    }

    fn quantity_after_reserve(&self, product: &str, quantity: u32) -> Result<u32> {
        let reserved = self.lines.get(product).map_or(0, |line| line.quantity);
        reserved
            .checked_add(quantity)
            .ok_or_else(|| Error::validation("cart quantity overflow"))
    }

    pub(crate) fn release(&mut self, product: &str) -> Option<CartLine> {
        self.lines.shift_remove(product)
    }

    /// Empty the cart, handing back its lines
    pub(crate) fn drain(&mut self) -> Vec<CartLine> {
        self.discount_rate = Percentage::ZERO;
        self.lines.drain(..).map(|(_, line)| line).collect()
    }
}
