//! Bank accounts
//!
//! Every mutator checks its precondition first and only then touches the
//! balance, so a failed call leaves the account exactly as it was.

use crate::Customer;
use entity_core::{ensure_non_negative, ensure_positive, Entity, Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account number
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Create account number
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

/// Bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    number: AccountNumber,
    balance: Decimal,
    holder: Customer,
    ceiling: Option<Decimal>,
}

impl Account {
    /// Open account with an initial balance
    pub fn new(number: AccountNumber, initial_balance: Decimal, holder: Customer) -> Result<Self> {
        ensure_non_negative(initial_balance, "initial balance")?;

        Ok(Self {
            number,
            balance: initial_balance,
            holder,
            ceiling: None,
        })
    }

    /// Cap the balance this account may hold
    pub fn with_ceiling(mut self, ceiling: Decimal) -> Result<Self> {
        ensure_positive(ceiling, "balance ceiling")?;
        if self.balance > ceiling {
            return Err(Error::validation(format!(
                "initial balance {} exceeds ceiling {}",
                self.balance, ceiling
            )));
        }
        self.ceiling = Some(ceiling);
        Ok(self)
    }

    /// Account number
    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Account holder
    pub fn holder(&self) -> &Customer {
        &self.holder
    }

    /// Balance ceiling, if any
    pub fn ceiling(&self) -> Option<Decimal> {
        self.ceiling
    }

    /// Check that `amount` could be credited
    pub fn check_credit(&self, amount: Decimal) -> Result<()> {
        self.balance_after_credit(amount).map(|_| ())
    }

    fn balance_after_credit(&self, amount: Decimal) -> Result<Decimal> {
        ensure_positive(amount, "deposit amount")?;

        let room = match self.ceiling {
            Some(ceiling) => ceiling - self.balance,
            None => Decimal::MAX - self.balance,
        };
        if amount > room {
            return Err(Error::insufficient("balance headroom", amount, room));
        }
        self.balance
            .checked_add(amount)
            .ok_or_else(|| Error::insufficient("balance headroom", amount, room))
    }

    /// Check that `amount` could be debited
    pub fn check_debit(&self, amount: Decimal) -> Result<()> {
        ensure_positive(amount, "withdrawal amount")?;

        if amount > self.balance {
            return Err(Error::insufficient("balance", amount, self.balance));
        }
        Ok(())
    }

    /// Add `amount`, returning the new balance
    pub fn credit(&mut self, amount: Decimal) -> Result<Decimal> {
        self.balance = self.balance_after_credit(amount)?;
        Ok(self.balance)
    }

    /// Subtract `amount`, returning the new balance
    pub fn debit(&mut self, amount: Decimal) -> Result<Decimal> {
        self.check_debit(amount)?;
        self.balance -= amount;
        Ok(self.balance)
    }
}

impl Entity for Account {
    type Id = AccountNumber;
    const KIND: &'static str = "account";

    fn id(&self) -> &AccountNumber {
        &self.number
    }
}
