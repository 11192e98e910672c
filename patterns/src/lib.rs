//! Design patterns
//!
//! Runtime-substitutable behaviour used by the systems:
//!
//! - **Settings**: explicitly owned key/value configuration (no global instance)
//! - **Factory**: closed product kinds selected by a validated tag
//! - **Observer**: ordered, synchronous event delivery to subscribers
//! - **Strategy**: swappable payment methods behind one processor

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod factory;
pub mod observer;
pub mod settings;
pub mod strategy;

// Re-exports
pub use entity_core::{Error, ErrorKind, Result};
pub use factory::{CatalogProduct, ProductFactory, ProductKind};
pub use observer::{CustomerObserver, Inbox, Publisher, Subscriber, SubscriptionId};
pub use settings::Settings;
pub use strategy::{
    CreditCard, PaymentMethod, PaymentProcessor, PaymentReceipt, PaymentStrategy, Pix,
};
