//! Library orchestration layer
//!
//! Books move through `Available -> Held(member) -> Available`. Lending and
//! returning resolve both the book and the member, check the transition,
//! and only then update both sides together.

use crate::{Availability, Book, Isbn, LibraryConfig, Member, MemberId};
use entity_core::{Error, Metrics, Registry, Result};

/// In-memory library
#[derive(Debug)]
pub struct Library {
    /// Catalog by ISBN
    books: Registry<Book>,

    /// Members by ID
    members: Registry<Member>,

    /// Operation counters (if enabled)
    metrics: Option<Metrics>,

    /// Configuration
    config: LibraryConfig,
}

impl Library {
    /// Create library with configuration
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            books: Registry::new(),
            members: Registry::new(),
            metrics: None,
            config,
        }
    }

    /// Record operation outcomes in `metrics`
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Library name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Add a book to the catalog
    pub fn register_book(&mut self, book: Book) -> Result<()> {
        let book = self.books.register(book)?;
        tracing::info!(isbn = %book.isbn(), title = book.title(), "Book registered");
        Ok(())
    }

    /// Add a member
    pub fn register_member(&mut self, member: Member) -> Result<()> {
        let member = self.members.register(member)?;
        tracing::info!(member = %member.id(), name = member.name(), "Member registered");
        Ok(())
    }

    /// Look up a book
    pub fn book(&self, isbn: &Isbn) -> Result<&Book> {
        self.books.find(isbn)
    }

    /// Look up a member
    pub fn member(&self, id: MemberId) -> Result<&Member> {
        self.members.find(&id)
    }

    /// All books in registration order
    pub fn books(&self) -> impl ExactSizeIterator<Item = &Book> + '_ {
        self.books.list()
    }

    /// All members in registration order
    pub fn members(&self) -> impl ExactSizeIterator<Item = &Member> + '_ {
        self.members.list()
    }

    /// Books currently on the shelf
    pub fn available_books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.list().filter(|book| book.is_available())
    }

    /// Member currently holding a book (`None` when it is on the shelf)
    pub fn holder_of(&self, isbn: &Isbn) -> Result<Option<&Member>> {
        match self.books.find(isbn)?.holder() {
            Some(id) => Ok(Some(self.members.find(&id)?)),
            None => Ok(None),
        }
    }

    /// Books held by a member, in borrowing order
    pub fn loans_of(&self, id: MemberId) -> Result<Vec<&Book>> {
        self.members
            .find(&id)?
            .loans()
            .iter()
            .map(|isbn| self.books.find(isbn))
            .collect()
    }

    /// Lend a book to a member
    ///
    /// Fails with `InsufficientResource` while another member (or the same
    /// one) holds the book.
    pub fn lend(&mut self, isbn: &Isbn, member: MemberId) -> Result<()> {
        let result = self.execute_lend(isbn, member);

        self.observe("lend", &result);
        match &result {
            Ok(()) => tracing::info!(%isbn, %member, "Book lent"),
            Err(err) => tracing::warn!(%isbn, %member, kind = %err.kind(), "Lend rejected: {}", err),
        }
        result
    }

    /// Take a book back from the member holding it
    ///
    /// Fails with `NotFound` (entity `loan`) when `member` does not hold it.
    pub fn return_book(&mut self, isbn: &Isbn, member: MemberId) -> Result<()> {
        let result = self.execute_return(isbn, member);

        self.observe("return", &result);
        match &result {
            Ok(()) => tracing::info!(%isbn, %member, "Book returned"),
            Err(err) => tracing::warn!(%isbn, %member, kind = %err.kind(), "Return rejected: {}", err),
        }
        result
    }

    fn execute_lend(&mut self, isbn: &Isbn, member: MemberId) -> Result<()> {
        let book = self.books.find(isbn)?;
        self.members.find(&member)?;

        if let Availability::Held(_) = book.availability() {
            return Err(Error::insufficient("copies", 1, 0));
        }

        self.books.find_mut(isbn)?.mark_held(member);
        self.members.find_mut(&member)?.push_loan(isbn.clone());
        Ok(())
    }

    fn execute_return(&mut self, isbn: &Isbn, member: MemberId) -> Result<()> {
        self.books.find(isbn)?;
        let holder = self.members.find(&member)?;

        if !holder.holds(isbn) {
            return Err(Error::not_found(
                "loan",
                format!("{} held by member {}", isbn, member),
            ));
        }

        self.members.find_mut(&member)?.remove_loan(isbn);
        self.books.find_mut(isbn)?.mark_available();
        Ok(())
    }

    fn observe<T>(&self, operation: &str, result: &Result<T>) {
        if let Some(metrics) = &self.metrics {
            metrics.observe(operation, result);
        }
    }
}
