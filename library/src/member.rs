//! Library members

use crate::Isbn;
use entity_core::{Entity, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Member ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(u32);

impl MemberId {
    /// Create member ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Numeric value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MemberId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Library member and the books they hold, in borrowing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    loans: Vec<Isbn>,
}

impl Member {
    /// Create member without loans
    pub fn new(id: MemberId, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::validation("member name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            loans: Vec::new(),
        })
    }

    /// Member ID
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Held books
    pub fn loans(&self) -> &[Isbn] {
        &self.loans
    }

    /// Whether the member holds `isbn`
    pub fn holds(&self, isbn: &Isbn) -> bool {
        self.loans.contains(isbn)
    }

    pub(crate) fn push_loan(&mut self, isbn: Isbn) {
        self.loans.push(isbn);
    }

    /// Drop `isbn` from the held set, reporting whether it was there
    pub(crate) fn remove_loan(&mut self, isbn: &Isbn) -> bool {
        match self.loans.iter().position(|held| held == isbn) {
            Some(index) => {
                self.loans.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Entity for Member {
    type Id = MemberId;
    const KIND: &'static str = "member";

    fn id(&self) -> &MemberId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loans_keep_order() {
        let mut member = Member::new(MemberId::new(2), "Maria Oliveira").unwrap();
        let first = Isbn::new("978-8532530783").unwrap();
        let second = Isbn::new("978-8535914849").unwrap();

        member.push_loan(first.clone());
        member.push_loan(second.clone());
        assert_eq!(member.loans(), &[first.clone(), second.clone()]);

        assert!(member.remove_loan(&first));
        assert!(!member.remove_loan(&first));
        assert_eq!(member.loans(), &[second]);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Member::new(MemberId::new(1), "").is_err());
    }
}
