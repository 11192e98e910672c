//! Library scenario: register the catalog, lend, query, return

use super::expect_rejected;
use crate::config::DemoConfig;
use ::library::{Book, Isbn, Library, Member, MemberId};
use entity_core::Metrics;

const CATALOG: [(&str, &str, &str); 5] = [
    ("O Senhor dos Aneis", "J.R.R. Tolkien", "978-8533613379"),
    ("Harry Potter", "J.K. Rowling", "978-8532530783"),
    ("1984", "George Orwell", "978-8535914849"),
    ("Dom Quixote", "Miguel de Cervantes", "978-8573264524"),
    ("A Metamorfose", "Franz Kafka", "978-8535902782"),
];

pub fn run(config: &DemoConfig, metrics: Option<Metrics>) -> anyhow::Result<()> {
    let mut library = Library::new(config.library.clone());
    if let Some(metrics) = metrics {
        library = library.with_metrics(metrics);
    }
    println!("Library: {}", library.name());

    for (title, author, isbn) in CATALOG {
        library.register_book(Book::new(title, author, Isbn::new(isbn)?)?)?;
    }
    for (id, name) in [(1, "Joao Silva"), (2, "Maria Oliveira"), (3, "Pedro Santos")] {
        library.register_member(Member::new(MemberId::new(id), name)?)?;
    }

    let isbn = |index: usize| Isbn::new(CATALOG[index].2);
    library.lend(&isbn(0)?, MemberId::new(1))?;
    library.lend(&isbn(1)?, MemberId::new(2))?;
    library.lend(&isbn(2)?, MemberId::new(2))?;
    library.lend(&isbn(3)?, MemberId::new(3))?;

    expect_rejected("Lend a held book", library.lend(&isbn(1)?, MemberId::new(1)))?;
    expect_rejected("Return by non-holder", library.return_book(&isbn(0)?, MemberId::new(2)))?;
    expect_rejected("Lookup unknown book", library.book(&Isbn::new("000-0000000000")?))?;

    println!("\nBook {}:", isbn(1)?);
    match library.holder_of(&isbn(1)?)? {
        Some(member) => println!("  lent to {} (ID: {})", member.name(), member.id()),
        None => println!("  available"),
    }

    library.return_book(&isbn(3)?, MemberId::new(3))?;

    println!("\nAvailable books:");
    for book in library.available_books() {
        println!("- {} ({})", book.title(), book.author());
    }

    println!("\nLoans:");
    for member in library.members() {
        let loans = library.loans_of(member.id())?;
        if loans.is_empty() {
            println!("- {}: none", member.name());
        }
        for book in loans {
            println!("- {}: {}", member.name(), book.title());
        }
    }
    Ok(())
}
