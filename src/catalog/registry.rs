//! In-process registry of table descriptors.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::error::{CatalogError, CatalogResult};
use super::info::TableInfo;

/// Shared map from table name to descriptor.
///
/// The lock guards only the descriptor map, never row data; rows remain
/// exclusively owned by their unit of work. Cloning the registry clones the
/// handle, not the map.
#[derive(Clone)]
pub struct TableRegistry {
    tables: Arc<RwLock<BTreeMap<String, Arc<TableInfo>>>>,
}

impl TableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Register a descriptor, validating it first.
    ///
    /// Fails with [`CatalogError::TableExists`] if a descriptor is already
    /// registered under the same name.
    pub fn register(&self, info: TableInfo) -> CatalogResult<Arc<TableInfo>> {
        info.validate()?;

        let mut tables = self.tables.write();
        let name = info.name.to_string();
        if tables.contains_key(&name) {
            return Err(CatalogError::TableExists(name));
        }

        let info = Arc::new(info);
        tables.insert(name, Arc::clone(&info));
        Ok(info)
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> CatalogResult<Arc<TableInfo>> {
        self.tables
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::TableNotFound(name.to_string()))
    }

    /// Check whether a descriptor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.read().contains_key(name)
    }

    /// Remove and return a descriptor.
    pub fn remove(&self, name: &str) -> CatalogResult<Arc<TableInfo>> {
        self.tables
            .write()
            .remove(name)
            .ok_or_else(|| CatalogError::TableNotFound(name.to_string()))
    }

    /// Names of all registered tables.
    pub fn table_names(&self) -> Vec<String> {
        self.tables.read().keys().cloned().collect()
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// True if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnDef, TableInfoBuilder, TableName};

    fn users_table() -> TableInfo {
        TableInfoBuilder::new("users")
            .add_column("id")
            .add_column("name")
            .primary_key("id")
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let registry = TableRegistry::new();
        assert!(registry.is_empty());

        registry.register(users_table()).unwrap();

        assert!(registry.contains("users"));
        assert_eq!(registry.len(), 1);

        let info = registry.get("users").unwrap();
        assert_eq!(info.column_names(), vec!["id", "name"]);
    }

    #[test]
    fn test_duplicate_registration() {
        let registry = TableRegistry::new();
        registry.register(users_table()).unwrap();

        let result = registry.register(users_table());
        assert_eq!(result.unwrap_err(), CatalogError::TableExists("users".to_string()));
    }

    #[test]
    fn test_register_validates() {
        let registry = TableRegistry::new();
        let invalid = TableInfo::new(
            TableName::new("bad").unwrap(),
            vec![ColumnDef::new("a")],
        );

        // built directly, never given a primary key
        let result = registry.register(invalid);
        assert_eq!(result.unwrap_err(), CatalogError::NoPrimaryKey("bad".to_string()));
    }

    #[test]
    fn test_missing_table() {
        let registry = TableRegistry::new();
        assert_eq!(
            registry.get("ghost").unwrap_err(),
            CatalogError::TableNotFound("ghost".to_string())
        );
    }

    #[test]
    fn test_remove() {
        let registry = TableRegistry::new();
        registry.register(users_table()).unwrap();

        let removed = registry.remove("users").unwrap();
        assert_eq!(removed.name.as_str(), "users");
        assert!(!registry.contains("users"));
        assert!(registry.remove("users").is_err());
    }

    #[test]
    fn test_shared_handle() {
        let registry = TableRegistry::new();
        let handle = registry.clone();

        registry.register(users_table()).unwrap();
        assert!(handle.contains("users"));
        assert_eq!(handle.table_names(), vec!["users".to_string()]);
    }
}
