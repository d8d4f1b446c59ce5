//! Primary key container.

use std::collections::BTreeMap;

use serde_json::Value;

use super::error::{RowError, RowResult};

/// The identity fields of a row.
///
/// Key fields live apart from the regular field set: setting one never
/// triggers dirty-tracking, because changing a row's identity has different
/// semantics than changing its data (the caller is responsible for
/// reconciling an identity change with storage). The set of key field names
/// is fixed at construction and never grows or shrinks.
#[derive(Debug, Clone, PartialEq)]
pub struct Primary {
    key: BTreeMap<String, Value>,
}

impl Primary {
    /// Create a key container from (name, value) pairs.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Self {
            key: pairs.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }

    /// Create a single-column key.
    pub fn single(name: impl Into<String>, value: Value) -> Self {
        Self::new([(name.into(), value)])
    }

    /// Check whether `field` is a declared key field.
    pub fn has(&self, field: &str) -> bool {
        self.key.contains_key(field)
    }

    /// Get a key value.
    pub fn get(&self, field: &str) -> RowResult<&Value> {
        self.key
            .get(field)
            .ok_or_else(|| RowError::unknown_field(field))
    }

    /// Overwrite a key value unconditionally.
    pub fn set(&mut self, field: &str, value: Value) -> RowResult<()> {
        match self.key.get_mut(field) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RowError::unknown_field(field)),
        }
    }

    /// Clear a key value to null.
    pub fn unset(&mut self, field: &str) -> RowResult<()> {
        self.set(field, Value::Null)
    }

    /// Snapshot of all key fields, used to build full-row copies.
    pub fn key_map(&self) -> BTreeMap<String, Value> {
        self.key.clone()
    }

    /// Declared key field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.key.keys().map(String::as_str)
    }

    /// Number of key fields.
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// True if the container holds no key fields.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_set_declared_field() {
        let mut primary = Primary::single("id", json!(1));

        assert!(primary.has("id"));
        assert_eq!(primary.get("id").unwrap(), &json!(1));

        primary.set("id", json!(2)).unwrap();
        assert_eq!(primary.get("id").unwrap(), &json!(2));
    }

    #[test]
    fn test_unknown_field() {
        let mut primary = Primary::single("id", json!(1));

        assert!(!primary.has("name"));
        assert_eq!(
            primary.get("name"),
            Err(RowError::unknown_field("name"))
        );
        assert_eq!(
            primary.set("name", json!("x")),
            Err(RowError::unknown_field("name"))
        );

        // the key set never grows, even after a failed set
        assert_eq!(primary.len(), 1);
    }

    #[test]
    fn test_composite_key() {
        let primary = Primary::new([
            ("order_id", json!(12)),
            ("line_no", json!(3)),
        ]);

        assert_eq!(primary.len(), 2);
        assert!(primary.has("order_id"));
        assert!(primary.has("line_no"));

        let names: Vec<&str> = primary.field_names().collect();
        assert_eq!(names, vec!["line_no", "order_id"]);
    }

    #[test]
    fn test_unset_clears_to_null() {
        let mut primary = Primary::single("id", json!(9));
        primary.unset("id").unwrap();

        // the field stays declared, only its value is cleared
        assert!(primary.has("id"));
        assert_eq!(primary.get("id").unwrap(), &Value::Null);
    }

    #[test]
    fn test_key_map_is_a_snapshot() {
        let mut primary = Primary::single("id", json!(1));
        let snapshot = primary.key_map();

        primary.set("id", json!(2)).unwrap();
        assert_eq!(snapshot.get("id"), Some(&json!(1)));
    }
}
