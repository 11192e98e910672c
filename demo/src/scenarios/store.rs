//! Store scenario: reserve stock in carts, apply discounts, check out

use super::expect_rejected;
use crate::config::DemoConfig;
use ::patterns::{CreditCard, PaymentMethod, PaymentProcessor};
use ::store::{Customer, Product, Store};
use entity_core::{Metrics, Percentage};
use rust_decimal_macros::dec;

pub fn run(config: &DemoConfig, metrics: Option<Metrics>) -> anyhow::Result<()> {
    let mut store = Store::new(config.store.clone());
    if let Some(metrics) = metrics {
        store = store.with_metrics(metrics);
    }
    println!("Store: {}", store.name());

    store.register_product(Product::new("Notebook", dec!(3500), "Notebook Dell 8GB RAM", dec!(2.5), 10)?)?;
    store.register_product(Product::new("Smartphone", dec!(2000), "iPhone 13 128GB", dec!(0.5), 15)?)?;
    store.register_product(Product::new("Headphone", dec!(300), "Fone Bluetooth JBL", dec!(0.3), 20)?)?;

    store.register_customer(Customer::new("Joao Silva", "joao@email.com", "Rua A, 123, Sao Paulo - SP")?)?;
    store.register_customer(Customer::new("Maria Santos", "maria@email.com", "Av B, 456, Rio de Janeiro - RJ")?)?;

    // Joao pays by card with 10% off
    let card = PaymentProcessor::new(Box::new(CreditCard::new("1234 5678 9012 3456")?));
    let mut cart = store.new_cart();
    store.add_to_cart(&mut cart, "Notebook", 1)?;
    store.add_to_cart(&mut cart, "Headphone", 2)?;
    cart.apply_discount(Percentage::new(dec!(10))?);
    let purchase = store.checkout("joao@email.com", &mut cart, &card)?;
    println!(
        "Joao paid {} with {} (order {})",
        purchase.total, purchase.payment.method, purchase.order_id
    );

    // Maria changes her mind about the headphone, then pays by PIX with 5% off
    let pix = PaymentProcessor::new("pix".parse::<PaymentMethod>()?.build("maria@email.com")?);
    let mut cart = store.new_cart();
    store.add_to_cart(&mut cart, "Smartphone", 1)?;
    store.add_to_cart(&mut cart, "Headphone", 1)?;
    store.remove_from_cart(&mut cart, "Headphone")?;
    cart.apply_discount(Percentage::new(dec!(5))?);
    let purchase = store.checkout("maria@email.com", &mut cart, &pix)?;
    println!(
        "Maria paid {} with {} (order {})",
        purchase.total, purchase.payment.method, purchase.order_id
    );

    println!();
    let mut cart = store.new_cart();
    expect_rejected("Reserve 50 notebooks", store.add_to_cart(&mut cart, "Notebook", 50))?;
    expect_rejected("Check out an empty cart", store.checkout("joao@email.com", &mut cart, &pix))?;
    expect_rejected("Short address", store.update_address("maria@email.com", "Rua C"))?;

    println!("\nPurchase history:");
    for customer in store.customers() {
        for (index, purchase) in customer.history().iter().enumerate() {
            println!("{} purchase {}:", customer.name(), index + 1);
            for line in &purchase.lines {
                println!("  - {}x {} ({})", line.quantity, line.product, line.line_total());
            }
            println!(
                "  subtotal {} shipping {} discount {} total {}",
                purchase.subtotal, purchase.shipping, purchase.discount, purchase.total
            );
        }
    }

    println!("\nFinal stock:");
    for product in store.products() {
        println!("- {} ({}): {} units", product.name(), product.description(), product.stock());
    }
    Ok(())
}
