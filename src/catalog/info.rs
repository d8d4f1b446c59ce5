//! Table descriptors and row factories.
//!
//! A [`TableInfo`] is the narrow contract the change-tracking core consumes:
//! the declared column set, the primary-key column(s), default values for
//! new rows, and the autoincrement flag. It also hosts the two entry points
//! that put a [`Row`] into circulation: [`TableInfo::new_row`] for rows born
//! in memory and [`TableInfo::loaded_row`] for rows read back from storage.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::{Primary, Row, RowStatus};

use super::error::{CatalogError, CatalogResult};
use super::types::{ColumnDef, TableName};

/// Descriptor for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name.
    pub name: TableName,
    /// Column definitions, key columns included.
    pub columns: Vec<ColumnDef>,
    /// Primary key column name(s); more than one means a composite key.
    pub primary_key: Vec<String>,
    /// Whether storage assigns the key value on insert.
    pub autoincrement: bool,
    /// Table description/comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TableInfo {
    /// Create a new descriptor. Use [`TableInfo::validate`] or go through
    /// [`TableInfoBuilder`] before handing it to a registry.
    pub fn new(name: TableName, columns: Vec<ColumnDef>) -> Self {
        let now = Utc::now();
        Self {
            name,
            columns,
            primary_key: Vec::new(),
            autoincrement: false,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the primary key columns.
    pub fn with_primary_key(mut self, columns: Vec<String>) -> Self {
        self.primary_key = columns;
        self
    }

    /// Set the autoincrement flag.
    pub fn with_autoincrement(mut self, autoincrement: bool) -> Self {
        self.autoincrement = autoincrement;
        self
    }

    /// Set the table description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Get a column definition by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Check whether `name` is a primary key column.
    pub fn is_key(&self, name: &str) -> bool {
        self.primary_key.iter().any(|k| k == name)
    }

    /// Columns outside the primary key.
    pub fn data_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| !self.is_key(&c.name))
    }

    /// Declared default values, by column name.
    pub fn default_values(&self) -> BTreeMap<String, Value> {
        self.columns
            .iter()
            .filter_map(|c| c.default.clone().map(|v| (c.name.clone(), v)))
            .collect()
    }

    /// Validate the descriptor itself.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();
        for col in &self.columns {
            if !seen.insert(&col.name) {
                return Err(CatalogError::DuplicateColumn(col.name.clone()));
            }
        }

        if self.primary_key.is_empty() {
            return Err(CatalogError::NoPrimaryKey(self.name.to_string()));
        }

        for key in &self.primary_key {
            if !self.columns.iter().any(|c| &c.name == key) {
                return Err(CatalogError::InvalidPrimaryKey(key.clone()));
            }
        }

        if self.autoincrement && self.primary_key.len() > 1 {
            return Err(CatalogError::AutoincrementCompositeKey(self.name.to_string()));
        }

        Ok(())
    }

    /// Build a row born in memory, with status `New`.
    ///
    /// Missing columns are filled from declared defaults, then null. An
    /// autoincrement key stays null until storage assigns it. Values for
    /// undeclared columns are rejected.
    pub fn new_row(&self, values: BTreeMap<String, Value>) -> CatalogResult<Row> {
        let mut values = self.checked(values)?;

        let key = self.primary_key.iter().map(|name| {
            let value = values
                .remove(name)
                .or_else(|| self.get_column(name).and_then(|c| c.default.clone()))
                .unwrap_or(Value::Null);
            (name.clone(), value)
        });
        let primary = Primary::new(key.collect::<Vec<_>>());

        let fields = self
            .data_columns()
            .map(|col| {
                let value = values
                    .remove(&col.name)
                    .or_else(|| col.default.clone())
                    .unwrap_or(Value::Null);
                (col.name.clone(), value)
            })
            .collect();

        Ok(Row::new(self.name.clone(), primary, fields))
    }

    /// Build a row from a storage read and settle it as `Clean`.
    ///
    /// Every key column must arrive present and non-null; data columns the
    /// read omitted are filled with null. No defaults apply, the stored
    /// values are the truth.
    pub fn loaded_row(&self, values: BTreeMap<String, Value>) -> CatalogResult<Row> {
        let mut values = self.checked(values)?;

        let mut key = Vec::with_capacity(self.primary_key.len());
        for name in &self.primary_key {
            match values.remove(name) {
                Some(Value::Null) | None => {
                    return Err(CatalogError::MissingKey {
                        table: self.name.to_string(),
                        column: name.clone(),
                    })
                }
                Some(value) => key.push((name.clone(), value)),
            }
        }
        let primary = Primary::new(key);

        let fields = self
            .data_columns()
            .map(|col| {
                let value = values.remove(&col.name).unwrap_or(Value::Null);
                (col.name.clone(), value)
            })
            .collect();

        let mut row = Row::new(self.name.clone(), primary, fields);
        row.set_status(RowStatus::Clean);
        Ok(row)
    }

    /// Reject values for columns the descriptor does not declare.
    fn checked(&self, values: BTreeMap<String, Value>) -> CatalogResult<BTreeMap<String, Value>> {
        for name in values.keys() {
            if self.get_column(name).is_none() {
                return Err(CatalogError::UnknownColumn {
                    table: self.name.to_string(),
                    column: name.clone(),
                });
            }
        }
        Ok(values)
    }

    /// Generate a surrogate key string (lowercase ULID), for tables whose
    /// keys are assigned by the application rather than storage.
    pub fn generate_key() -> String {
        ulid::Ulid::new().to_string().to_lowercase()
    }
}

/// Builder for table descriptors.
pub struct TableInfoBuilder {
    name: String,
    columns: Vec<ColumnDef>,
    primary_key: Vec<String>,
    autoincrement: bool,
    description: Option<String>,
}

impl TableInfoBuilder {
    /// Start building a descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
            autoincrement: false,
            description: None,
        }
    }

    /// Add a column.
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a simple column with just a name.
    pub fn add_column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(ColumnDef::new(name));
        self
    }

    /// Add a primary key column. Call repeatedly for a composite key.
    pub fn primary_key(mut self, column_name: impl Into<String>) -> Self {
        self.primary_key.push(column_name.into());
        self
    }

    /// Set the autoincrement flag.
    pub fn autoincrement(mut self, value: bool) -> Self {
        self.autoincrement = value;
        self
    }

    /// Set the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Build and validate the descriptor.
    pub fn build(self) -> CatalogResult<TableInfo> {
        let mut info = TableInfo::new(TableName::new(self.name)?, self.columns)
            .with_primary_key(self.primary_key)
            .with_autoincrement(self.autoincrement);
        if let Some(desc) = self.description {
            info = info.with_description(desc);
        }
        info.validate()?;
        Ok(info)
    }
}
