//! Error types shared by every system

use std::fmt;
use thiserror::Error;

/// Result type for entity and registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Entity errors
#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied an out-of-domain value
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup by identity found nothing
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Entity kind that was looked up
        entity: &'static str,
        /// Identity that was looked up
        key: String,
    },

    /// Registration with an identity already present
    #[error("{entity} already registered: {key}")]
    DuplicateKey {
        /// Entity kind that was registered
        entity: &'static str,
        /// Conflicting identity
        key: String,
    },

    /// Requested amount or quantity exceeds what is available
    #[error("Insufficient {resource}: requested {requested}, available {available}")]
    InsufficientResource {
        /// What ran short (balance, stock, ...)
        resource: &'static str,
        /// Requested amount
        requested: String,
        /// Amount currently available
        available: String,
    },

    /// A selector tag with no matching variant
    #[error("Unsupported {kind}: {tag}")]
    UnsupportedVariant {
        /// Selector family (product kind, payment method, ...)
        kind: &'static str,
        /// Rejected tag
        tag: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Validation error from any message
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Not-found error for an entity kind and key
    pub fn not_found(entity: &'static str, key: impl fmt::Display) -> Self {
        Error::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Duplicate-key error for an entity kind and key
    pub fn duplicate(entity: &'static str, key: impl fmt::Display) -> Self {
        Error::DuplicateKey {
            entity,
            key: key.to_string(),
        }
    }

    /// Insufficient-resource error
    pub fn insufficient(
        resource: &'static str,
        requested: impl fmt::Display,
        available: impl fmt::Display,
    ) -> Self {
        Error::InsufficientResource {
            resource,
            requested: requested.to_string(),
            available: available.to_string(),
        }
    }

    /// Unsupported-variant error
    pub fn unsupported(kind: &'static str, tag: impl Into<String>) -> Self {
        Error::UnsupportedVariant {
            kind,
            tag: tag.into(),
        }
    }

    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Error::InsufficientResource { .. } => ErrorKind::InsufficientResource,
            Error::UnsupportedVariant { .. } => ErrorKind::UnsupportedVariant,
            Error::Config(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Error discriminant, comparable without matching on messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Out-of-domain input
    Validation,
    /// Missing identity
    NotFound,
    /// Identity already present
    DuplicateKey,
    /// Not enough balance, stock or copies
    InsufficientResource,
    /// Unknown selector tag
    UnsupportedVariant,
    /// Bad configuration
    Config,
    /// IO failure
    Io,
}

impl ErrorKind {
    /// Stable snake_case label
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::DuplicateKey => "duplicate_key",
            ErrorKind::InsufficientResource => "insufficient_resource",
            ErrorKind::UnsupportedVariant => "unsupported_variant",
            ErrorKind::Config => "config",
            ErrorKind::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
