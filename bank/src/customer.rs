//! Bank customers

use entity_core::{Email, Error, Result};
use serde::{Deserialize, Serialize};

/// Account holder
///
/// Name and tax ID are fixed at creation; only the e-mail can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    tax_id: String,
    email: Email,
}

impl Customer {
    /// Create customer
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>, email: &str) -> Result<Self> {
        let name = name.into();
        let tax_id = tax_id.into();

        if name.trim().is_empty() {
            return Err(Error::validation("customer name cannot be empty"));
        }
        if tax_id.trim().is_empty() {
            return Err(Error::validation("customer tax ID cannot be empty"));
        }

        Ok(Self {
            name,
            tax_id,
            email: Email::parse(email)?,
        })
    }

    /// Full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tax ID (CPF)
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Contact e-mail
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Change the e-mail; unchanged when the new one is malformed
    pub fn set_email(&mut self, email: &str) -> Result<()> {
        self.email = Email::parse(email)?;
        Ok(())
    }
}
