//! Property-based tests for bank transfers
//!
//! - Conservation: the sum of balances never changes across transfers
//! - Atomicity: a rejected transfer leaves every balance untouched
//! - Non-negativity: no sequence of operations drives a balance below zero

use bank::{AccountNumber, Bank, BankConfig, Customer};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn open_bank(balances: &[u32]) -> (Bank, Vec<AccountNumber>) {
    let mut bank = Bank::new(BankConfig::default());
    let numbers = balances
        .iter()
        .enumerate()
        .map(|(i, balance)| {
            let holder = Customer::new(
                format!("Holder {}", i),
                format!("{:03}", i),
                &format!("holder{}@bank.com", i),
            )
            .unwrap();
            bank.open_account(Decimal::from(*balance), holder).unwrap()
        })
        .collect();
    (bank, numbers)
}

fn snapshot(bank: &Bank) -> Vec<Decimal> {
    bank.accounts().map(|account| account.balance()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: transfers conserve the total and never overdraw
    #[test]
    fn prop_transfers_conserve_money(
        balances in prop::collection::vec(0u32..5_000, 2..6),
        transfers in prop::collection::vec((0usize..6, 0usize..6, 1u32..3_000), 0..30),
    ) {
        let (mut bank, numbers) = open_bank(&balances);
        let total: Decimal = snapshot(&bank).iter().sum();

        for (from, to, amount) in transfers {
            let from = &numbers[from % numbers.len()];
            let to = &numbers[to % numbers.len()];
            let _ = bank.transfer(from, to, Decimal::from(amount));
        }

        let after = snapshot(&bank);
        prop_assert_eq!(after.iter().sum::<Decimal>(), total);
        prop_assert!(after.iter().all(|balance| *balance >= Decimal::ZERO));
    }

    /// Property: a rejected transfer changes nothing
    #[test]
    fn prop_rejected_transfer_is_noop(
        source in 0u32..1_000,
        destination in 0u32..1_000,
        excess in 1u32..1_000,
    ) {
        let (mut bank, numbers) = open_bank(&[source, destination]);
        let before = snapshot(&bank);

        let result = bank.transfer(&numbers[0], &numbers[1], Decimal::from(source + excess));

        prop_assert!(result.is_err());
        prop_assert_eq!(snapshot(&bank), before);
    }
}
