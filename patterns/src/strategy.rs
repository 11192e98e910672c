//! Payment strategies
//!
//! The processor holds exactly one active strategy and delegates to it
//! without knowing its concrete type.

use chrono::{DateTime, Utc};
use entity_core::{ensure_positive, Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Proof of an approved payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Payment ID (UUIDv7 for time-ordering)
    pub payment_id: Uuid,

    /// Strategy description at the time of payment
    pub method: String,

    /// Amount charged
    pub amount: Decimal,

    /// Method-specific reference (masked card, PIX key)
    pub reference: String,

    /// Approval timestamp
    pub approved_at: DateTime<Utc>,
}

/// Way of paying an amount
pub trait PaymentStrategy {
    /// Short description, safe to log
    fn describe(&self) -> String;

    /// Charge `amount`
    fn pay(&self, amount: Decimal) -> Result<PaymentReceipt>;
}

/// Credit card payment
#[derive(Clone)]
pub struct CreditCard {
    number: String,
}

impl CreditCard {
    /// Create from a card number; spaces and dashes are ignored
    pub fn new(number: &str) -> Result<Self> {
        let digits: String = number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        if digits.len() < 12 || digits.len() > 19 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::validation("card number must have 12 to 19 digits"));
        }

        Ok(Self { number: digits })
    }

    /// Last four digits
    pub fn last_four(&self) -> &str {
        &self.number[self.number.len() - 4..]
    }

    /// Card number with everything but the last four digits hidden
    pub fn masked(&self) -> String {
        format!("**** **** **** {}", self.last_four())
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("number", &self.masked())
            .finish()
    }
}

impl PaymentStrategy for CreditCard {
    fn describe(&self) -> String {
        format!("Credit card: **** {}", self.last_four())
    }

    fn pay(&self, amount: Decimal) -> Result<PaymentReceipt> {
        ensure_positive(amount, "payment amount")?;

        Ok(PaymentReceipt {
            payment_id: Uuid::now_v7(),
            method: self.describe(),
            amount,
            reference: self.masked(),
            approved_at: Utc::now(),
        })
    }
}

/// PIX instant payment
#[derive(Debug, Clone)]
pub struct Pix {
    key: String,
}

impl Pix {
    /// Create from a PIX key
    pub fn new(key: &str) -> Result<Self> {
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::validation("PIX key cannot be empty"));
        }
        Ok(Self {
            key: key.to_string(),
        })
    }

    /// PIX key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PaymentStrategy for Pix {
    fn describe(&self) -> String {
        format!("PIX: {}", self.key)
    }

    fn pay(&self, amount: Decimal) -> Result<PaymentReceipt> {
        ensure_positive(amount, "payment amount")?;

        Ok(PaymentReceipt {
            payment_id: Uuid::now_v7(),
            method: self.describe(),
            amount,
            reference: self.key.clone(),
            approved_at: Utc::now(),
        })
    }
}

/// Closed set of payment method tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit card, credential is the card number
    CreditCard,
    /// PIX, credential is the key
    Pix,
}

impl PaymentMethod {
    /// Build the strategy for this method
    pub fn build(self, credential: &str) -> Result<Box<dyn PaymentStrategy>> {
        let strategy: Box<dyn PaymentStrategy> = match self {
            PaymentMethod::CreditCard => Box::new(CreditCard::new(credential)?),
            PaymentMethod::Pix => Box::new(Pix::new(credential)?),
        };
        Ok(strategy)
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit_card" | "card" => Ok(PaymentMethod::CreditCard),
            "pix" => Ok(PaymentMethod::Pix),
            _ => Err(Error::unsupported("payment method", s)),
        }
    }
}

/// Processor delegating to the active strategy
pub struct PaymentProcessor {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentProcessor {
    /// Create processor with an initial strategy
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the active strategy
    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        tracing::debug!(
            from = %self.strategy.describe(),
            to = %strategy.describe(),
            "Payment strategy swapped"
        );
        self.strategy = strategy;
    }

    /// Description of the active strategy
    pub fn describe(&self) -> String {
        self.strategy.describe()
    }

    /// Charge `amount` with the active strategy
    pub fn process(&self, amount: Decimal) -> Result<PaymentReceipt> {
        ensure_positive(amount, "payment amount")?;

        tracing::info!(method = %self.strategy.describe(), %amount, "Processing payment");
        self.strategy.pay(amount)
    }
}

impl fmt::Debug for PaymentProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentProcessor")
            .field("strategy", &self.strategy.describe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_core::ErrorKind;
    use rust_decimal_macros::dec;

    fn card() -> Box<dyn PaymentStrategy> {
        Box::new(CreditCard::new("1234567890123456").unwrap())
    }

    fn pix() -> Box<dyn PaymentStrategy> {
        Box::new(Pix::new("email@example.com").unwrap())
    }

    #[test]
    fn test_credit_card_payment() {
        let processor = PaymentProcessor::new(card());
        let receipt = processor.process(dec!(1000)).unwrap();

        assert_eq!(receipt.amount, dec!(1000));
        assert_eq!(receipt.reference, "**** **** **** 3456");
        assert_eq!(receipt.method, "Credit card: **** 3456");
    }

    #[test]
    fn test_pix_payment() {
        let processor = PaymentProcessor::new(pix());
        let receipt = processor.process(dec!(500)).unwrap();

        assert_eq!(receipt.amount, dec!(500));
        assert_eq!(receipt.reference, "email@example.com");
    }

    #[test]
    fn test_swap_strategy() {
        let mut processor = PaymentProcessor::new(card());
        let first = processor.process(dec!(1000)).unwrap();

        processor.set_strategy(pix());
        let second = processor.process(dec!(500)).unwrap();

        assert_eq!(first.method, "Credit card: **** 3456");
        assert_eq!(second.method, "PIX: email@example.com");
        assert_eq!(processor.describe(), "PIX: email@example.com");
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(card().describe(), "Credit card: **** 3456");
        assert_eq!(pix().describe(), "PIX: email@example.com");
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let processor = PaymentProcessor::new(pix());
        let err = processor.process(dec!(-5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_invalid_credentials() {
        assert!(CreditCard::new("1234").is_err());
        assert!(CreditCard::new("1234-5678-9012-abcd").is_err());
        assert!(CreditCard::new("1234 5678 9012 3456").is_ok());
        assert!(Pix::new("   ").is_err());
    }

    #[test]
    fn test_payment_method_tags() {
        let strategy = "pix"
            .parse::<PaymentMethod>()
            .unwrap()
            .build("key@bank.com")
            .unwrap();
        assert_eq!(strategy.describe(), "PIX: key@bank.com");

        let err = "boleto".parse::<PaymentMethod>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedVariant);
    }

    #[test]
    fn test_debug_masks_card() {
        let card = CreditCard::new("1234567890123456").unwrap();
        let debug = format!("{:?}", card);
        assert!(!debug.contains("12345678"));
        assert!(debug.contains("3456"));
    }
}
