//! Store
//!
//! Product catalog, customers, a reserving cart with shipping and discount,
//! a deferred basket, and checkout through a payment strategy.
//!
//! # Invariants
//!
//! - Stock never goes below zero
//! - Units reserved by carts plus units in stock stay constant until checkout
//! - A rejected cart, basket or checkout operation moves no stock
//!
//! # Example
//!
//! ```
//! use patterns::{PaymentProcessor, Pix};
//! use rust_decimal::Decimal;
//! use store::{Customer, Product, Store, StoreConfig};
//!
//! let mut store = Store::new(StoreConfig::default());
//! store.register_product(Product::new("Notebook", Decimal::from(3500), "8GB RAM", Decimal::from(2), 10)?)?;
//! store.register_customer(Customer::new("Joao", "joao@email.com", "Rua A, 123, Sao Paulo")?)?;
//!
//! let mut cart = store.new_cart();
//! store.add_to_cart(&mut cart, "Notebook", 1)?;
//! assert_eq!(cart.total(), Decimal::from(3510));
//!
//! let pix = PaymentProcessor::new(Box::new(Pix::new("joao@email.com")?));
//! store.checkout("joao@email.com", &mut cart, &pix)?;
//! assert_eq!(store.product("Notebook")?.stock(), 9);
//! # Ok::<(), store::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod basket;
pub mod cart;
pub mod config;
pub mod customer;
pub mod product;
pub mod store;

// Re-exports
pub use basket::{Basket, BasketLine, OrderReceipt};
pub use cart::{Cart, CartLine};
pub use config::StoreConfig;
pub use customer::{Customer, Purchase};
pub use entity_core::{Error, ErrorKind, Result};
pub use product::Product;
pub use store::Store;
