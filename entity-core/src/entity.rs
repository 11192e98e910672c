//! Entity contract
//!
//! An entity has an identity fixed at creation and private state that only
//! its own guarded methods may change.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identity-bearing object stored in a [`Registry`](crate::Registry)
pub trait Entity {
    /// Identity type (account number, ISBN, e-mail, ...)
    type Id: Clone + Eq + Hash + Display + Debug;

    /// Human readable kind, used in error messages and logs
    const KIND: &'static str;

    /// Identity of this entity
    fn id(&self) -> &Self::Id;
}
