//! Library
//!
//! Book catalog, members and the lend/return state machine.
//!
//! # Invariants
//!
//! - A book is held by at most one member at a time
//! - A member's loans list a book exactly when the book is held by them
//! - A rejected lend or return changes neither the book nor the member

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod book;
pub mod config;
pub mod library;
pub mod member;

// Re-exports
pub use book::{Availability, Book, Isbn};
pub use config::LibraryConfig;
pub use entity_core::{Error, ErrorKind, Result};
pub use library::Library;
pub use member::{Member, MemberId};
