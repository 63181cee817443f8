//! Error types for the Rangecast system.
//!
//! Uses `thiserror` for ergonomic error definition. Parsing itself never
//! fails; these errors cover the construction boundary only: gazetteer
//! building, dataset loading, and terminal I/O in the runtime layer.

use thiserror::Error;

/// Convenience result alias for Rangecast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Rangecast operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a duplicate canonical name error.
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateName(name.into()))
    }

    /// Creates an empty name error.
    #[must_use]
    pub fn empty_name() -> Self {
        Self::new(ErrorKind::EmptyName)
    }

    /// Creates a dataset error.
    #[must_use]
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Dataset(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Two gazetteer entries normalized to the same canonical form.
    #[error("duplicate canonical name in gazetteer: {0}")]
    DuplicateName(String),

    /// A gazetteer entry was empty after normalization.
    #[error("empty name in gazetteer input")]
    EmptyName,

    /// A gazetteer dataset could not be read or decoded.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
