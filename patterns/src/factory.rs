//! Product factory
//!
//! Product kinds form a closed set. Free-form tags are parsed once, where
//! they enter the program; everything after that matches exhaustively.

use entity_core::{ensure_positive, Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of catalog product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Electronic device
    Electronic,
    /// Book
    Book,
}

impl ProductKind {
    /// Tag accepted by `FromStr`
    pub fn tag(&self) -> &'static str {
        match self {
            ProductKind::Electronic => "electronic",
            ProductKind::Book => "book",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Electronic => "Electronic",
            ProductKind::Book => "Book",
        }
    }

    /// Warranty in months, if the kind carries one
    pub fn warranty_months(&self) -> Option<u32> {
        match self {
            ProductKind::Electronic => Some(12),
            ProductKind::Book => None,
        }
    }

    /// Formats the product ships in
    pub fn formats(&self) -> &'static [&'static str] {
        match self {
            ProductKind::Electronic => &["physical"],
            ProductKind::Book => &["digital", "print"],
        }
    }
}

impl FromStr for ProductKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electronic" => Ok(ProductKind::Electronic),
            "book" => Ok(ProductKind::Book),
            _ => Err(Error::unsupported("product kind", s)),
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product built by the factory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    kind: ProductKind,
    name: String,
    price: Decimal,
}

impl CatalogProduct {
    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Product kind
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Display label of the kind
    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }

    /// Warranty in months, if any
    pub fn warranty_months(&self) -> Option<u32> {
        self.kind.warranty_months()
    }

    /// Available formats
    pub fn formats(&self) -> &'static [&'static str] {
        self.kind.formats()
    }
}

/// Factory for catalog products
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFactory;

impl ProductFactory {
    /// Create new factory
    pub fn new() -> Self {
        Self
    }

    /// Create a product of a known kind
    pub fn create(
        &self,
        kind: ProductKind,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<CatalogProduct> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::validation("product name cannot be empty"));
        }
        ensure_positive(price, "price")?;

        tracing::debug!(%kind, %name, %price, "Created catalog product");
        Ok(CatalogProduct { kind, name, price })
    }

    /// Parse a kind tag, then create the product
    pub fn create_from_tag(
        &self,
        tag: &str,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<CatalogProduct> {
        let kind = tag.parse()?;
        self.create(kind, name, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_core::ErrorKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_electronic() {
        let product = ProductFactory::new()
            .create_from_tag("electronic", "Notebook", dec!(5000))
            .unwrap();

        assert_eq!(product.kind(), ProductKind::Electronic);
        assert_eq!(product.name(), "Notebook");
        assert_eq!(product.price(), dec!(5000));
        assert_eq!(product.type_label(), "Electronic");
        assert_eq!(product.warranty_months(), Some(12));
    }

    #[test]
    fn test_create_book() {
        let product = ProductFactory::new()
            .create_from_tag("Book", "Clean Code", dec!(150))
            .unwrap();

        assert_eq!(product.kind(), ProductKind::Book);
        assert_eq!(product.type_label(), "Book");
        assert_eq!(product.warranty_months(), None);
        assert_eq!(product.formats(), &["digital", "print"]);
    }

    #[test]
    fn test_unknown_tag() {
        let err = ProductFactory::new()
            .create_from_tag("invalid", "Test Product", dec!(100))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnsupportedVariant);
        assert_eq!(err.to_string(), "Unsupported product kind: invalid");
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let err = ProductFactory::new()
            .create(ProductKind::Book, "Free Book", dec!(0))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_tag_round_trip() {
        for kind in [ProductKind::Electronic, ProductKind::Book] {
            assert_eq!(kind.tag().parse::<ProductKind>().unwrap(), kind);
        }
    }
}
