//! Table descriptors and their registry.
//!
//! The change-tracking core never resolves metadata itself; a row is
//! constructed already knowing its table and key fields. This module is the
//! configuration side of that bargain: per-table descriptors (columns,
//! primary key, defaults, autoincrement) plus the factories that construct
//! rows from them, and a process-wide registry to look descriptors up by
//! name.

mod error;
mod info;
mod registry;
mod types;

pub use error::{CatalogError, CatalogResult};
pub use info::{TableInfo, TableInfoBuilder};
pub use registry::TableRegistry;
pub use types::{ColumnDef, InvalidNameError, TableName};
