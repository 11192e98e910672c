//! Entity Core
//!
//! Shared building blocks for the in-memory systems (bank, library, store).
//!
//! # Architecture
//!
//! - **Entity**: immutable identity plus private state, mutated only through
//!   guarded methods that validate before applying
//! - **Registry**: insertion-ordered keyed store enforcing uniqueness on
//!   register and existence on lookup
//! - **Error taxonomy**: one error enum whose kinds callers can branch on
//!
//! # Invariants
//!
//! - A failed mutation leaves the entity exactly as it was
//! - A rejected registration never stores the second entity
//! - Operations touching several entities validate everything before mutating

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod entity;
pub mod error;
pub mod metrics;
pub mod registry;
pub mod types;

// Re-exports
pub use config::{load_toml, Config};
pub use entity::Entity;
pub use error::{Error, ErrorKind, Result};
pub use metrics::Metrics;
pub use registry::Registry;
pub use types::{ensure_non_negative, ensure_positive, Email, Percentage};
