//! Property-based tests for stock movements
//!
//! - Conservation: stock plus units reserved in a cart is constant
//! - Atomicity: rejected cart and order operations move no stock
//! - Release: clearing a cart restores the initial stock exactly

use proptest::prelude::*;
use rust_decimal::Decimal;
use store::{Basket, Product, Store, StoreConfig};

const PRODUCTS: [&str; 3] = ["Notebook", "Mouse", "Teclado"];

#[derive(Debug, Clone)]
enum Op {
    Add(usize, u32),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..PRODUCTS.len(), 0u32..8).prop_map(|(p, q)| Op::Add(p, q)),
        1 => (0..PRODUCTS.len()).prop_map(Op::Remove),
    ]
}

fn seeded(stocks: &[u32]) -> Store {
    let mut store = Store::new(StoreConfig::default());
    for (name, stock) in PRODUCTS.iter().zip(stocks) {
        store
            .register_product(Product::new(*name, Decimal::from(10), "", Decimal::ONE, *stock).unwrap())
            .unwrap();
    }
    store
}

fn stocks(store: &Store) -> Vec<u32> {
    store.products().map(|p| p.stock()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: stock plus reserved units never changes
    #[test]
    fn prop_cart_conserves_stock(
        initial in prop::collection::vec(0u32..20, 3),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut store = seeded(&initial);
        let mut cart = store.new_cart();

        for op in ops {
            let before = stocks(&store);
            let result = match op {
                Op::Add(p, q) => store.add_to_cart(&mut cart, PRODUCTS[p], q),
                Op::Remove(p) => store.remove_from_cart(&mut cart, PRODUCTS[p]),
            };
            if result.is_err() {
                prop_assert_eq!(stocks(&store), before);
            }

            for (i, name) in PRODUCTS.iter().enumerate() {
                let reserved = cart.line(name).map(|line| line.quantity).unwrap_or(0);
                prop_assert_eq!(store.product(name).unwrap().stock() + reserved, initial[i]);
            }
        }

        store.clear_cart(&mut cart).unwrap();
        prop_assert_eq!(stocks(&store), initial);
    }

    /// Property: an order either takes every line or nothing
    #[test]
    fn prop_order_all_or_nothing(
        initial in prop::collection::vec(0u32..20, 3),
        requests in prop::collection::vec((0..PRODUCTS.len(), 1u32..10), 1..6),
        drain in 0u32..20,
    ) {
        let mut store = seeded(&initial);
        let mut basket = Basket::new();
        for (p, q) in requests {
            let _ = store.add_to_basket(&mut basket, PRODUCTS[p], q);
        }
        prop_assume!(!basket.is_empty());

        let _ = store.remove_stock(PRODUCTS[0], drain);
        let before = stocks(&store);

        match store.place_order(&mut basket) {
            Ok(order) => {
                for line in &order.lines {
                    let index = PRODUCTS.iter().position(|name| *name == line.product).unwrap();
                    prop_assert_eq!(store.product(&line.product).unwrap().stock(), before[index] - line.quantity);
                }
                prop_assert!(basket.is_empty());
            }
            Err(_) => prop_assert_eq!(stocks(&store), before),
        }
    }
}
