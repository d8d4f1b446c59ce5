//! The change-tracking core.
//!
//! One logical database row held in memory, instrumented so a persistence
//! layer can decide what to write and compute the minimal changed-field
//! set. Two entities cooperate:
//!
//! ```text
//!  ┌──────────────────────────────────────────────┐
//!  │                     Row                      │
//!  │  non-key fields · lifecycle status · diffing │
//!  └──────────────────────┬───────────────────────┘
//!                         │ key-field access
//!                         ▼
//!  ┌──────────────────────────────────────────────┐
//!  │                   Primary                    │
//!  │   identity fields, never dirty-tracked       │
//!  └──────────────────────────────────────────────┘
//! ```
//!
//! The lifecycle runs `new` → (`clean`) → `dirty` → `inserted`/`updated`,
//! with `trash` flagging a row for deletion and `deleted` closing it to
//! further mutation. See [`RowStatus`] for the transition rules.

mod error;
mod primary;
mod row;
mod status;
mod value;

pub use error::{RowError, RowResult};
pub use primary::Primary;
pub use row::Row;
pub use status::RowStatus;
pub use value::{is_same_value, numeric_value};
