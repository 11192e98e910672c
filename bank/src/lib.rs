//! Bank
//!
//! Customers, accounts and an in-memory bank holding accounts by number.
//!
//! # Invariants
//!
//! - Balances never go negative (nor above a configured ceiling)
//! - A rejected deposit, withdrawal or transfer changes no balance
//! - Money conservation: a transfer moves exactly its amount between two accounts
//!
//! # Example
//!
//! ```
//! use bank::{Bank, BankConfig, Customer};
//! use rust_decimal::Decimal;
//!
//! let mut bank = Bank::new(BankConfig::default());
//! let joao = Customer::new("Joao da Silva", "123.456.789-00", "joao@email.com")?;
//! let maria = Customer::new("Maria Oliveira", "987.654.321-00", "maria@email.com")?;
//!
//! let from = bank.open_account(Decimal::from(1000), joao)?;
//! let to = bank.open_account(Decimal::from(2000), maria)?;
//!
//! bank.transfer(&from, &to, Decimal::from(300))?;
//! assert_eq!(bank.account(&from)?.balance(), Decimal::from(700));
//! assert_eq!(bank.account(&to)?.balance(), Decimal::from(2300));
//! # Ok::<(), bank::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod account;
pub mod bank;
pub mod config;
pub mod customer;

// Re-exports
pub use account::{Account, AccountNumber};
pub use bank::{Bank, TransferReceipt};
pub use config::BankConfig;
pub use customer::Customer;
pub use entity_core::{Error, ErrorKind, Result};
