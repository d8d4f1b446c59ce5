//! Row lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RowError;

/// Lifecycle status of an in-memory row.
///
/// A row starts as [`New`](RowStatus::New), moves to
/// [`Dirty`](RowStatus::Dirty) as data fields change, and is stamped
/// [`Inserted`](RowStatus::Inserted), [`Updated`](RowStatus::Updated), or
/// [`Deleted`](RowStatus::Deleted) by the persistence layer after a
/// successful write. [`Trash`](RowStatus::Trash) flags a row for deletion
/// while keeping it mutable; `Deleted` is a terminal dead-end for mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// new instance, in memory only
    New,
    /// selected, and not yet modified in memory
    Clean,
    /// selected/inserted/updated, then modified in memory
    Dirty,
    /// marked for deletion but not deleted, modification allowed
    Trash,
    /// inserted, and not again modified in memory
    Inserted,
    /// updated, and not again modified in memory
    Updated,
    /// deleted, modification no longer allowed
    Deleted,
}

impl RowStatus {
    /// All seven recognized statuses.
    pub const ALL: [RowStatus; 7] = [
        RowStatus::New,
        RowStatus::Clean,
        RowStatus::Dirty,
        RowStatus::Trash,
        RowStatus::Inserted,
        RowStatus::Updated,
        RowStatus::Deleted,
    ];

    /// Stable label for this status, as stored in persistence metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::New => "new",
            RowStatus::Clean => "clean",
            RowStatus::Dirty => "dirty",
            RowStatus::Trash => "trash",
            RowStatus::Inserted => "inserted",
            RowStatus::Updated => "updated",
            RowStatus::Deleted => "deleted",
        }
    }

    /// Check whether the row has been durably written.
    ///
    /// True for `Inserted`, `Updated`, and `Deleted`; false for the four
    /// in-memory-only statuses.
    pub fn is_saved(&self) -> bool {
        matches!(
            self,
            RowStatus::Inserted | RowStatus::Updated | RowStatus::Deleted
        )
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RowStatus {
    type Err = RowError;

    /// Parse a status label. Labels outside the seven recognized states
    /// fail with [`RowError::InvalidStatus`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(RowStatus::New),
            "clean" => Ok(RowStatus::Clean),
            "dirty" => Ok(RowStatus::Dirty),
            "trash" => Ok(RowStatus::Trash),
            "inserted" => Ok(RowStatus::Inserted),
            "updated" => Ok(RowStatus::Updated),
            "deleted" => Ok(RowStatus::Deleted),
            other => Err(RowError::InvalidStatus(other.to_string())),
        }
    }
}
