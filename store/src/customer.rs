//! Store customers and their purchase history

use crate::CartLine;
use chrono::{DateTime, Utc};
use entity_core::{Email, Entity, Error, Result};
use patterns::PaymentReceipt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    /// Order ID (UUIDv7 for time-ordering)
    pub order_id: Uuid,

    /// Lines bought, with the prices they were reserved at
    pub lines: Vec<CartLine>,

    /// Sum of line totals
    pub subtotal: Decimal,

    /// Shipping charged
    pub shipping: Decimal,

    /// Discount granted
    pub discount: Decimal,

    /// Amount paid
    pub total: Decimal,

    /// Payment approval
    pub payment: PaymentReceipt,

    /// Checkout timestamp
    pub purchased_at: DateTime<Utc>,
}

/// Store customer, identified by e-mail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    email: Email,
    address: String,
    history: Vec<Purchase>,
}

impl Customer {
    /// Create customer without purchases
    pub fn new(name: impl Into<String>, email: &str, address: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::validation("customer name cannot be empty"));
        }

        Ok(Self {
            name,
            email: Email::parse(email)?,
            address: address.into(),
            history: Vec::new(),
        })
    }

    /// Name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// E-mail (registry identity)
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Delivery address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Purchases, oldest first
    pub fn history(&self) -> &[Purchase] {
        &self.history
    }

    /// Change the delivery address
    pub fn set_address(&mut self, address: impl Into<String>, min_len: usize) -> Result<()> {
        let address = address.into();
        check_address(&address, min_len)?;
        self.address = address;
        Ok(())
    }

    pub(crate) fn record_purchase(&mut self, purchase: Purchase) {
        self.history.push(purchase);
    }
}

impl Entity for Customer {
    type Id = Email;
    const KIND: &'static str = "customer";

    fn id(&self) -> &Email {
        &self.email
    }
}

pub(crate) fn check_address(address: &str, min_len: usize) -> Result<()> {
    if address.trim().chars().count() < min_len {
        return Err(Error::validation(format!(
            "address must have at least {} characters",
            min_len
        )));
    }
    Ok(())
}
