//! Shared error type for `fl-core`.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, the same way they wrap each other.

use thiserror::Error;

use crate::LocationId;

/// Errors produced by the core value types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("location {0} not found")]
    UnknownLocation(LocationId),

    #[error("duplicate {what} name {name:?}")]
    DuplicateName { what: &'static str, name: String },

    #[error("invalid timestamp {0:?}: expected YYYY-MM-DDTHH:MM:SS")]
    InvalidTimestamp(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `fl-core`.
pub type CoreResult<T> = Result<T, CoreError>;
