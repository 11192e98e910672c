//! Basket scenario: stock is checked on add and taken only on order

use super::expect_rejected;
use crate::config::DemoConfig;
use ::store::{Basket, Product, Store};
use entity_core::Metrics;
use rust_decimal_macros::dec;

pub fn run(config: &DemoConfig, metrics: Option<Metrics>) -> anyhow::Result<()> {
    let mut store = Store::new(config.store.clone());
    if let Some(metrics) = metrics {
        store = store.with_metrics(metrics);
    }

    store.register_product(Product::new("Notebook", dec!(3500), "", dec!(2), 5)?)?;
    store.register_product(Product::new("Mouse", dec!(100), "", dec!(0.1), 10)?)?;
    store.register_product(Product::new("Teclado", dec!(200), "", dec!(0.8), 8)?)?;

    let mut basket = Basket::new();
    store.add_to_basket(&mut basket, "Notebook", 1)?;
    store.add_to_basket(&mut basket, "Mouse", 2)?;
    store.add_to_basket(&mut basket, "Teclado", 1)?;
    expect_rejected("Add 10 keyboards", store.add_to_basket(&mut basket, "Teclado", 10))?;

    println!("\nBasket:");
    for line in basket.lines() {
        println!("- {}x {}", line.quantity, line.product);
    }

    let order = store.place_order(&mut basket)?;
    println!("\nOrder {} placed, total {}", order.order_id, order.total);

    println!("\nStock after the order:");
    for product in store.products() {
        println!("- {}: {}", product.name(), product.stock());
    }
    Ok(())
}
