//! Banking scenario: open accounts, move money, show rejections

use super::expect_rejected;
use crate::config::DemoConfig;
use ::bank::{Bank, Customer};
use entity_core::Metrics;
use rust_decimal_macros::dec;

pub fn run(config: &DemoConfig, metrics: Option<Metrics>) -> anyhow::Result<()> {
    let mut bank = Bank::new(config.bank.clone());
    if let Some(metrics) = metrics {
        bank = bank.with_metrics(metrics);
    }
    println!("Bank: {}", bank.name());

    let joao = Customer::new("Joao da Silva", "123.456.789-00", "joao@email.com")?;
    let maria = Customer::new("Maria Oliveira", "987.654.321-00", "maria@email.com")?;

    let first = bank.open_account(dec!(1000), joao)?;
    let second = bank.open_account(dec!(2000), maria)?;

    for account in bank.accounts() {
        println!(
            "Account {} ({}): balance {}",
            account.number(),
            account.holder().name(),
            account.balance()
        );
    }

    println!("\nDeposit 500 into {}: balance {}", first, bank.deposit(&first, dec!(500))?);
    println!("Withdraw 200 from {}: balance {}", first, bank.withdraw(&first, dec!(200))?);

    let receipt = bank.transfer(&first, &second, dec!(300))?;
    println!(
        "Transfer {} of {} from {} to {}: balances {} / {}",
        receipt.transfer_id,
        receipt.amount,
        receipt.from,
        receipt.to,
        receipt.from_balance,
        receipt.to_balance
    );

    println!();
    expect_rejected("Withdraw 5000", bank.withdraw(&first, dec!(5000)))?;
    expect_rejected("Deposit -100", bank.deposit(&first, dec!(-100)))?;
    expect_rejected("Transfer to self", bank.transfer(&first, &first, dec!(10)))?;

    println!(
        "\nFinal balances: {} / {}",
        bank.account(&first)?.balance(),
        bank.account(&second)?.balance()
    );
    Ok(())
}
