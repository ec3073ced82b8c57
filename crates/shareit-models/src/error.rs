//! Boundary validation errors.

use thiserror::Error;

/// A request failed shape or constraint validation before reaching domain logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} cannot be cleared")]
    NotNullable(&'static str),

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("from must be >= 0 and size must be >= 1 (got from={from}, size={size})")]
    InvalidPage { from: i64, size: i64 },

    #[error("Unknown state: UNSUPPORTED_STATUS")]
    UnknownState(String),

    #[error("{0}")]
    InvalidRange(&'static str),
}
