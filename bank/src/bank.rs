//! Bank orchestration layer
//!
//! Owns the account registry and runs the operations that touch accounts.
//! Multi-account operations resolve every participant and validate every
//! leg before the first balance changes.

use crate::{Account, AccountNumber, BankConfig, Customer};
use chrono::{DateTime, Utc};
use entity_core::{Error, Metrics, Registry, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of generated account numbers
const ACCOUNT_NUMBER_LEN: usize = 9;

/// Outcome of a committed transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Transfer ID (UUIDv7 for time-ordering)
    pub transfer_id: Uuid,

    /// Debited account
    pub from: AccountNumber,

    /// Credited account
    pub to: AccountNumber,

    /// Amount moved
    pub amount: Decimal,

    /// Source balance after the transfer
    pub from_balance: Decimal,

    /// Destination balance after the transfer
    pub to_balance: Decimal,

    /// Execution timestamp
    pub executed_at: DateTime<Utc>,
}

/// In-memory bank
#[derive(Debug)]
pub struct Bank {
    /// Accounts by number
    accounts: Registry<Account>,

    /// Operation counters (if enabled)
    metrics: Option<Metrics>,

    /// Configuration
    config: BankConfig,
}

impl Bank {
    /// Create bank with configuration
    pub fn new(config: BankConfig) -> Self {
        Self {
            accounts: Registry::new(),
            metrics: None,
            config,
        }
    }

    /// Record operation outcomes in `metrics`
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Bank name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Open an account under a freshly generated number
    pub fn open_account(&mut self, initial_balance: Decimal, holder: Customer) -> Result<AccountNumber> {
        let number = self.generate_number();
        let account = self.apply_policy(Account::new(number.clone(), initial_balance, holder)?)?;

        let holder_name = account.holder().name().to_string();
        self.accounts.register(account)?;

        tracing::info!(account = %number, holder = %holder_name, "Account opened");
        Ok(number)
    }

    /// Register an account built by the caller (explicit number)
    pub fn register_account(&mut self, account: Account) -> Result<()> {
        let account = self.apply_policy(account)?;
        self.accounts.register(account)?;
        Ok(())
    }

    /// Look up an account
    pub fn account(&self, number: &AccountNumber) -> Result<&Account> {
        self.accounts.find(number)
    }

    /// All accounts in opening order
    pub fn accounts(&self) -> impl ExactSizeIterator<Item = &Account> + '_ {
        self.accounts.list()
    }

    /// Deposit into an account, returning the new balance
    pub fn deposit(&mut self, number: &AccountNumber, amount: Decimal) -> Result<Decimal> {
        let result = self
            .accounts
            .find_mut(number)
            .and_then(|account| account.credit(amount));

        self.observe("deposit", &result);
        if let Ok(balance) = &result {
            tracing::info!(account = %number, %amount, %balance, "Deposit completed");
        }
        result
    }

    /// Withdraw from an account, returning the new balance
    pub fn withdraw(&mut self, number: &AccountNumber, amount: Decimal) -> Result<Decimal> {
        let result = self
            .accounts
            .find_mut(number)
            .and_then(|account| account.debit(amount));

        self.observe("withdraw", &result);
        if let Ok(balance) = &result {
            tracing::info!(account = %number, %amount, %balance, "Withdrawal completed");
        }
        result
    }

    /// Move `amount` from one account to another
    ///
    /// Both accounts are resolved and both legs validated before either
    /// balance changes; a rejected transfer leaves both untouched.
    pub fn transfer(
        &mut self,
        from: &AccountNumber,
        to: &AccountNumber,
        amount: Decimal,
    ) -> Result<TransferReceipt> {
        let result = self.execute_transfer(from, to, amount);

        self.observe("transfer", &result);
        match &result {
            Ok(receipt) => tracing::info!(
                transfer = %receipt.transfer_id,
                %from,
                %to,
                %amount,
                "Transfer completed"
            ),
            Err(err) => tracing::warn!(%from, %to, %amount, kind = %err.kind(), "Transfer rejected: {}", err),
        }
        result
    }

    fn execute_transfer(
        &mut self,
        from: &AccountNumber,
        to: &AccountNumber,
        amount: Decimal,
    ) -> Result<TransferReceipt> {
        // Step 1: resolve participants
        let source = self.accounts.find(from)?;
        let destination = self.accounts.find(to)?;

        if from == to {
            return Err(Error::validation(format!(
                "cannot transfer from account {} to itself",
                from
            )));
        }

        // Step 2: validate both legs
        source.check_debit(amount)?;
        destination.check_credit(amount)?;

        // Step 3: commit
        let from_balance = self.accounts.find_mut(from)?.debit(amount)?;
        let to_balance = self.accounts.find_mut(to)?.credit(amount)?;

        Ok(TransferReceipt {
            transfer_id: Uuid::now_v7(),
            from: from.clone(),
            to: to.clone(),
            amount,
            from_balance,
            to_balance,
            executed_at: Utc::now(),
        })
    }

    fn apply_policy(&self, account: Account) -> Result<Account> {
        match self.config.balance_ceiling {
            Some(ceiling) if account.ceiling().is_none() => account.with_ceiling(ceiling),
            _ => Ok(account),
        }
    }

    fn generate_number(&self) -> AccountNumber {
        loop {
            let candidate = Uuid::new_v4().simple().to_string();
            let number = AccountNumber::new(&candidate[..ACCOUNT_NUMBER_LEN]);
            if !self.accounts.contains(&number) {
                return number;
            }
        }
    }

    fn observe<T>(&self, operation: &str, result: &Result<T>) {
        if let Some(metrics) = &self.metrics {
            metrics.observe(operation, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_core::{metrics::COMMITTED, ErrorKind};
    use rust_decimal_macros::dec;

    fn customer(name: &str, email: &str) -> Customer {
        Customer::new(name, "000.000.000-00", email).unwrap()
    }

    fn bank_with_two(a: Decimal, b: Decimal) -> (Bank, AccountNumber, AccountNumber) {
        let mut bank = Bank::new(BankConfig::default());
        let first = bank.open_account(a, customer("Joao", "joao@email.com")).unwrap();
        let second = bank.open_account(b, customer("Maria", "maria@email.com")).unwrap();
        (bank, first, second)
    }

    #[test]
    fn test_open_account_generates_number() {
        let (bank, first, second) = bank_with_two(dec!(1000), dec!(2000));

        assert_eq!(first.as_str().len(), ACCOUNT_NUMBER_LEN);
        assert_ne!(first, second);
        assert_eq!(bank.accounts().len(), 2);
        assert_eq!(bank.account(&first).unwrap().holder().name(), "Joao");
    }

    #[test]
    fn test_open_account_negative_balance() {
        let mut bank = Bank::new(BankConfig::default());
        let err = bank
            .open_account(dec!(-1), customer("Joao", "joao@email.com"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(bank.accounts().len(), 0);
    }

    #[test]
    fn test_register_duplicate_account() {
        let mut bank = Bank::new(BankConfig::default());
        let number = AccountNumber::new("0001");
        let first = Account::new(number.clone(), dec!(10), customer("Ana", "ana@x.com")).unwrap();
        let second = Account::new(number.clone(), dec!(99), customer("Bia", "bia@x.com")).unwrap();

        bank.register_account(first).unwrap();
        let err = bank.register_account(second).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(bank.account(&number).unwrap().balance(), dec!(10));
    }

    #[test]
    fn test_deposit_and_withdraw() {
        let (mut bank, joao, _) = bank_with_two(dec!(1000), dec!(2000));

        assert_eq!(bank.deposit(&joao, dec!(500)).unwrap(), dec!(1500));
        assert_eq!(bank.withdraw(&joao, dec!(200)).unwrap(), dec!(1300));

        let err = bank.withdraw(&joao, dec!(5000)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientResource);
        assert_eq!(bank.account(&joao).unwrap().balance(), dec!(1300));
    }

    #[test]
    fn test_transfer_between_accounts() {
        let (mut bank, joao, maria) = bank_with_two(dec!(1000), dec!(2000));

        let receipt = bank.transfer(&joao, &maria, dec!(300)).unwrap();

        assert_eq!(receipt.from_balance, dec!(700));
        assert_eq!(receipt.to_balance, dec!(2300));
        assert_eq!(bank.account(&joao).unwrap().balance(), dec!(700));
        assert_eq!(bank.account(&maria).unwrap().balance(), dec!(2300));
    }

    #[test]
    fn test_transfer_insufficient_funds() {
        let (mut bank, joao, maria) = bank_with_two(dec!(100), dec!(2000));

        let err = bank.transfer(&joao, &maria, dec!(300)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InsufficientResource);
        assert_eq!(bank.account(&joao).unwrap().balance(), dec!(100));
        assert_eq!(bank.account(&maria).unwrap().balance(), dec!(2000));
    }

    #[test]
    fn test_deposit_and_transfer_beyond_decimal_range() {
        let (mut bank, joao, maria) = bank_with_two(Decimal::MAX, dec!(1));

        let err = bank.deposit(&maria, Decimal::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientResource);

        let err = bank.transfer(&joao, &maria, Decimal::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientResource);
        assert_eq!(bank.account(&joao).unwrap().balance(), Decimal::MAX);
        assert_eq!(bank.account(&maria).unwrap().balance(), dec!(1));
    }

    #[test]
    fn test_transfer_unknown_account() {
        let (mut bank, joao, _) = bank_with_two(dec!(1000), dec!(2000));
        let ghost = AccountNumber::new("ghost");

        let err = bank.transfer(&joao, &ghost, dec!(10)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = bank.transfer(&ghost, &joao, dec!(10)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(bank.account(&joao).unwrap().balance(), dec!(1000));
    }

    #[test]
    fn test_transfer_to_self() {
        let (mut bank, joao, _) = bank_with_two(dec!(1000), dec!(2000));
        let err = bank.transfer(&joao, &joao, dec!(10)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(bank.account(&joao).unwrap().balance(), dec!(1000));
    }

    #[test]
    fn test_transfer_ceiling_blocks_before_debit() {
        let config = BankConfig {
            balance_ceiling: Some(dec!(2100)),
            ..BankConfig::default()
        };
        let mut bank = Bank::new(config);
        let joao = bank.open_account(dec!(1000), customer("Joao", "joao@email.com")).unwrap();
        let maria = bank.open_account(dec!(2000), customer("Maria", "maria@email.com")).unwrap();

        let err = bank.transfer(&joao, &maria, dec!(300)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InsufficientResource);
        assert_eq!(bank.account(&joao).unwrap().balance(), dec!(1000));
        assert_eq!(bank.account(&maria).unwrap().balance(), dec!(2000));
    }

    #[test]
    fn test_metrics_recorded() {
        let metrics = Metrics::new().unwrap();
        let mut bank = Bank::new(BankConfig::default()).with_metrics(metrics.clone());
        let joao = bank.open_account(dec!(100), customer("Joao", "joao@email.com")).unwrap();
        let maria = bank.open_account(dec!(0), customer("Maria", "maria@email.com")).unwrap();

        bank.transfer(&joao, &maria, dec!(50)).unwrap();
        let _ = bank.transfer(&joao, &maria, dec!(500));

        assert_eq!(metrics.count("transfer", COMMITTED), 1);
        assert_eq!(metrics.count("transfer", "insufficient_resource"), 1);
    }
}
