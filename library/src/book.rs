//! Books and their loan state

use crate::MemberId;
use entity_core::{Entity, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISBN, the book identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Isbn(String);

impl Isbn {
    /// Create ISBN; surrounding whitespace is dropped
    pub fn new(isbn: impl Into<String>) -> Result<Self> {
        let isbn = isbn.into().trim().to_string();
        if isbn.is_empty() {
            return Err(Error::validation("ISBN cannot be empty"));
        }
        Ok(Self(isbn))
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Loan state of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "member", rename_all = "snake_case")]
pub enum Availability {
    /// On the shelf
    Available,
    /// Lent to a member
    Held(MemberId),
}

/// Library book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: Isbn,
    availability: Availability,
}

impl Book {
    /// Create an available book
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: Isbn) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(Error::validation("book title cannot be empty"));
        }

        Ok(Self {
            title,
            author: author.into(),
            isbn,
            availability: Availability::Available,
        })
    }

    /// Title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// ISBN
    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    /// Current loan state
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// Whether the book can be lent
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Member currently holding the book
    pub fn holder(&self) -> Option<MemberId> {
        match self.availability {
            Availability::Held(member) => Some(member),
            Availability::Available => None,
        }
    }

    pub(crate) fn mark_held(&mut self, member: MemberId) {
        self.availability = Availability::Held(member);
    }

    pub(crate) fn mark_available(&mut self) {
        self.availability = Availability::Available;
    }
}

impl Entity for Book {
    type Id = Isbn;
    const KIND: &'static str = "book";

    fn id(&self) -> &Isbn {
        &self.isbn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_core::ErrorKind;

    #[test]
    fn test_isbn_trimmed() {
        let isbn = Isbn::new("  978-8535914849 ").unwrap();
        assert_eq!(isbn.as_str(), "978-8535914849");
        assert_eq!(Isbn::new("  ").unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_new_book_is_available() {
        let book = Book::new("1984", "George Orwell", Isbn::new("978-8535914849").unwrap()).unwrap();
        assert!(book.is_available());
        assert_eq!(book.holder(), None);
        assert_eq!(book.author(), "George Orwell");
    }

    #[test]
    fn test_toggle_availability() {
        let mut book = Book::new("1984", "George Orwell", Isbn::new("1").unwrap()).unwrap();

        book.mark_held(MemberId::new(7));
        assert_eq!(book.availability(), Availability::Held(MemberId::new(7)));
        assert_eq!(book.holder(), Some(MemberId::new(7)));

        book.mark_available();
        assert!(book.is_available());
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = Book::new(" ", "Anon", Isbn::new("1").unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
