//! RowTrack - change tracking for database rows
//!
//! This crate provides the unit-of-work primitive beneath a data mapper:
//! every row loaded from or destined for storage passes through a
//! change-tracked [`Row`](row::Row), which records what changed, whether
//! the row still needs a write, and whether it is legal to change it
//! further. Primary-key fields live in their own container and are never
//! dirty-tracked.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use rowtrack::catalog::TableInfoBuilder;
//! use rowtrack::row::RowStatus;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let employee = TableInfoBuilder::new("employee")
//!     .add_column("id")
//!     .add_column("name")
//!     .add_column("salary")
//!     .primary_key("id")
//!     .autoincrement(true)
//!     .build()?;
//!
//! let mut row = employee.new_row(BTreeMap::from([
//!     ("name".to_string(), json!("Alice")),
//! ]))?;
//! assert!(row.is_new());
//!
//! // the persistence layer runs the INSERT, assigns the key, reports back
//! row.set("id", json!(7))?;
//! row.set_status(RowStatus::Inserted);
//!
//! // touching a persisted row marks it dirty again
//! let baseline = row.full_copy();
//! row.set("salary", json!(1200))?;
//! assert!(row.is_dirty());
//! assert_eq!(row.diff_against(&baseline).len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod row;
