//! Catalog error types.

use thiserror::Error;

use super::types::InvalidNameError;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by table descriptors and the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// invalid table name
    #[error("invalid table name: {0}")]
    InvalidName(#[from] InvalidNameError),

    /// the same column declared twice
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    /// a descriptor without any primary key column
    #[error("table {0} has no primary key")]
    NoPrimaryKey(String),

    /// the primary key names a column that is not declared
    #[error("invalid primary key reference: {0}")]
    InvalidPrimaryKey(String),

    /// autoincrement only makes sense for a single-column key
    #[error("autoincrement requires a single-column primary key, table {0} has a composite key")]
    AutoincrementCompositeKey(String),

    /// a row value for a column the descriptor does not declare
    #[error("unknown column {column} in table {table}")]
    UnknownColumn { table: String, column: String },

    /// a loaded row is missing a primary key value
    #[error("missing primary key value for column {column} in table {table}")]
    MissingKey { table: String, column: String },

    /// the registry already holds a descriptor under this name
    #[error("table already registered: {0}")]
    TableExists(String),

    /// no descriptor registered under this name
    #[error("table not found: {0}")]
    TableNotFound(String),
}
