//! Row-level error types.
//!
//! All of these are caller programming errors, not recoverable runtime
//! conditions. They surface immediately; a failed operation leaves the row
//! exactly as it was.

use thiserror::Error;

/// Result type alias for row operations.
pub type RowResult<T> = Result<T, RowError>;

/// Errors raised by row and primary-key operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// the field is neither a key field nor a present data field
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    /// a row from one table was passed where another was expected
    #[error("wrong table: expected {expected}, got {actual}")]
    WrongTable { expected: String, actual: String },

    /// mutation attempted on a row whose status is deleted
    #[error("row is deleted, field {field} can no longer be modified")]
    ImmutableOnceDeleted { field: String },

    /// a status label outside the seven recognized states
    #[error("invalid row status: {0}")]
    InvalidStatus(String),
}

impl RowError {
    /// Create an unknown-field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField { field: field.into() }
    }

    /// Create an immutable-once-deleted error.
    pub fn immutable_once_deleted(field: impl Into<String>) -> Self {
        Self::ImmutableOnceDeleted { field: field.into() }
    }
}
