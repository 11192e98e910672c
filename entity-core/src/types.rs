//! Core value types
//!
//! All types are designed for:
//! - Validation at construction (no invalid value can exist)
//! - Exact arithmetic (Decimal for money and weights)

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// E-mail address with a non-empty local part and domain
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse an e-mail address
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();

        match trimmed.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(Error::validation(format!("invalid email: {:?}", raw))),
        }
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Email::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Percentage between 0 and 100 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Percentage(Decimal);

impl Percentage {
    /// Zero percent
    pub const ZERO: Percentage = Percentage(Decimal::ZERO);

    /// Create a percentage, rejecting values outside 0..=100
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(Error::validation(format!(
                "percentage must be between 0 and 100, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Raw value (0..=100)
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Apply to an amount
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Percentage::new(value)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Reject zero and negative values
pub fn ensure_positive(value: Decimal, what: &str) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(Error::validation(format!(
            "{} must be positive, got {}",
            what, value
        )));
    }
    Ok(())
}

/// Reject negative values
pub fn ensure_non_negative(value: Decimal, what: &str) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(Error::validation(format!(
            "{} cannot be negative, got {}",
            what, value
        )));
    }
    Ok(())
}
