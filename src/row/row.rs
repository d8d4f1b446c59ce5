//! The change-tracked row.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::catalog::TableName;

use super::error::{RowError, RowResult};
use super::primary::Primary;
use super::status::RowStatus;
use super::value::is_same_value;

/// One database record held in memory, instrumented for change tracking.
///
/// A `Row` owns its non-key field set and lifecycle status and delegates
/// key-field access to [`Primary`]. A persistence layer reads the status to
/// decide between INSERT, UPDATE, DELETE, or skip, uses
/// [`diff_against`](Row::diff_against) to compute the minimal UPDATE column
/// set, and records the outcome with [`set_status`](Row::set_status).
///
/// A row is a plain value with no internal locking; the contract assumes
/// exclusive ownership by one unit of work at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    table: TableName,
    primary: Primary,
    fields: BTreeMap<String, Value>,
    status: RowStatus,
}

impl Row {
    /// Create a new row with status [`RowStatus::New`].
    pub fn new(table: TableName, primary: Primary, fields: BTreeMap<String, Value>) -> Self {
        Self {
            table,
            primary,
            fields,
            status: RowStatus::New,
        }
    }

    // ------------------------------------------------------------------
    // field access
    // ------------------------------------------------------------------

    /// Check whether `field` is a key field or a present data field.
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field) || self.primary.has(field)
    }

    /// Get a field value, key or data.
    pub fn get(&self, field: &str) -> RowResult<&Value> {
        if self.primary.has(field) {
            return self.primary.get(field);
        }
        self.fields
            .get(field)
            .ok_or_else(|| RowError::unknown_field(field))
    }

    /// Set a field value.
    ///
    /// Key fields are overwritten in [`Primary`] with no status change.
    /// Data fields go through the state machine: the row becomes
    /// [`Dirty`](RowStatus::Dirty) when a tracked value actually changes.
    /// Fails with [`RowError::ImmutableOnceDeleted`] once the row is
    /// deleted, key and data fields alike.
    pub fn set(&mut self, field: &str, value: Value) -> RowResult<()> {
        self.assert_has(field)?;
        if self.is_deleted() {
            return Err(RowError::immutable_once_deleted(field));
        }

        if self.primary.has(field) {
            return self.primary.set(field, value);
        }

        self.modify(field, value)
    }

    /// Clear a field value to null.
    ///
    /// For data fields this is `set(field, null)` for the purposes of the
    /// status transition; for key fields the value is cleared in
    /// [`Primary`] with no status change.
    pub fn unset(&mut self, field: &str) -> RowResult<()> {
        self.assert_has(field)?;
        if self.is_deleted() {
            return Err(RowError::immutable_once_deleted(field));
        }

        if self.primary.has(field) {
            return self.primary.unset(field);
        }

        self.modify(field, Value::Null)
    }

    fn assert_has(&self, field: &str) -> RowResult<()> {
        if !self.has(field) {
            return Err(RowError::unknown_field(field));
        }
        Ok(())
    }

    /// Overwrite a data field, applying the status transition rules.
    fn modify(&mut self, field: &str, new: Value) -> RowResult<()> {
        if self.is_deleted() {
            return Err(RowError::immutable_once_deleted(field));
        }

        // a wholly new or wholly doomed row needs no dirty-tracking
        if self.is_new() || self.is_trash() {
            self.fields.insert(field.to_string(), new);
            return Ok(());
        }

        let changed = match self.fields.get(field) {
            Some(old) => !is_same_value(old, &new),
            None => true,
        };
        self.fields.insert(field.to_string(), new);
        if changed {
            self.status = RowStatus::Dirty;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // identity
    // ------------------------------------------------------------------

    /// The table this row belongs to.
    pub fn table(&self) -> &TableName {
        &self.table
    }

    /// Assert that this row belongs to `expected`.
    ///
    /// Used defensively by layers that compose rows from multiple tables.
    pub fn assert_table(&self, expected: &TableName) -> RowResult<()> {
        if expected != &self.table {
            return Err(RowError::WrongTable {
                expected: expected.to_string(),
                actual: self.table.to_string(),
            });
        }
        Ok(())
    }

    /// The key container.
    pub fn primary(&self) -> &Primary {
        &self.primary
    }

    // ------------------------------------------------------------------
    // status
    // ------------------------------------------------------------------

    /// Current lifecycle status.
    pub fn status(&self) -> RowStatus {
        self.status
    }

    /// Overwrite the status unconditionally.
    ///
    /// This is how the persistence layer feeds back the outcome of a write
    /// (`Inserted`/`Updated`/`Deleted`), flags a row for deletion
    /// (`Trash`), or settles a freshly loaded row (`Clean`).
    pub fn set_status(&mut self, status: RowStatus) {
        self.status = status;
    }

    /// Check the status against a single expected value.
    pub fn has_status(&self, status: RowStatus) -> bool {
        self.status == status
    }

    /// Check the status for membership in a set of values.
    pub fn has_any_status(&self, statuses: &[RowStatus]) -> bool {
        statuses.contains(&self.status)
    }

    pub fn is_new(&self) -> bool {
        self.status == RowStatus::New
    }

    pub fn is_clean(&self) -> bool {
        self.status == RowStatus::Clean
    }

    pub fn is_dirty(&self) -> bool {
        self.status == RowStatus::Dirty
    }

    pub fn is_trash(&self) -> bool {
        self.status == RowStatus::Trash
    }

    pub fn is_inserted(&self) -> bool {
        self.status == RowStatus::Inserted
    }

    pub fn is_updated(&self) -> bool {
        self.status == RowStatus::Updated
    }

    pub fn is_deleted(&self) -> bool {
        self.status == RowStatus::Deleted
    }

    /// True once the row has been durably written.
    pub fn is_saved(&self) -> bool {
        self.status.is_saved()
    }

    // ------------------------------------------------------------------
    // snapshot & diff
    // ------------------------------------------------------------------

    /// Complete field map, key and data fields merged.
    ///
    /// Key values win when a name collides with a data field. Suitable as
    /// the column list for an INSERT, or as a baseline for a later diff.
    pub fn full_copy(&self) -> BTreeMap<String, Value> {
        let mut copy = self.fields.clone();
        copy.extend(self.primary.key_map());
        copy
    }

    /// The subset of fields whose current value differs from `baseline`.
    ///
    /// Comparison uses the same dual rule as dirty-tracking, so a value
    /// that merely changed numeric representation is not reported. A field
    /// absent from the baseline has nothing to compare against and is
    /// always retained. Suitable as the column list for an UPDATE.
    pub fn diff_against(&self, baseline: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
        let mut diff = self.full_copy();
        diff.retain(|field, value| match baseline.get(field) {
            Some(base) => !is_same_value(base, value),
            None => true,
        });
        diff
    }
}
