//! Store products
//!
//! Stock is an unsigned count; every mutator validates before applying so
//! a rejected call leaves the product unchanged.

use entity_core::{ensure_positive, Entity, Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product, identified by its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Decimal,
    description: String,
    weight_kg: Decimal,
    stock: u32,
}

impl Product {
    /// Create product
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
        weight_kg: Decimal,
        stock: u32,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::validation("product name cannot be empty"));
        }
        ensure_positive(price, "price")?;
        ensure_positive(weight_kg, "weight")?;

        Ok(Self {
            name,
            price,
            description: description.into(),
            weight_kg,
            stock,
        })
    }

    /// Name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unit weight in kilograms
    pub fn weight_kg(&self) -> Decimal {
        self.weight_kg
    }

    /// Units in stock
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Change the unit price
    pub fn set_price(&mut self, price: Decimal) -> Result<()> {
        ensure_positive(price, "price")?;
        self.price = price;
        Ok(())
    }

    /// Put units back in stock, returning the new stock
    pub fn add_stock(&mut self, quantity: u32) -> Result<u32> {
        self.stock = self.stock_after_add(quantity)?;
        Ok(self.stock)
    }

    /// Check that `quantity` units could be put back
    pub fn check_add(&self, quantity: u32) -> Result<()> {
        self.stock_after_add(quantity).map(|_| ())
    }

    fn stock_after_add(&self, quantity: u32) -> Result<u32> {
        ensure_quantity(quantity)?;
        self.stock
            .checked_add(quantity)
            .ok_or_else(|| Error::validation(format!("stock of {} would overflow", self.name)))
    }

    /// Check that `quantity` units could be taken
    pub fn check_remove(&self, quantity: u32) -> Result<()> {
        ensure_quantity(quantity)?;
        if quantity > self.stock {
            return Err(Error::insufficient("stock", quantity, self.stock));
        }
        Ok(())
    }

    /// Take units out of stock, returning the new stock
    pub fn remove_stock(&mut self, quantity: u32) -> Result<u32> {
        self.check_remove(quantity)?;
        self.stock -= quantity;
        Ok(self.stock)
    }
}

impl Entity for Product {
    type Id = String;
    const KIND: &'static str = "product";

    fn id(&self) -> &String {
        &self.name
    }
}

pub(crate) fn ensure_quantity(quantity: u32) -> Result<()> {
    if quantity == 0 {
        return Err(Error::validation("quantity must be greater than zero"));
    }
    Ok(())
}
