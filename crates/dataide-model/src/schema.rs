//! Declared table and column metadata.

use serde::{Deserialize, Serialize};

/// Declaration of a single column.
///
/// `dtype` is free-form text; profilers treat it as an advisory hint only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    pub dtype: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    /// PII sensitivity tag: none, low, moderate or high.
    #[serde(default = "default_pii")]
    pub pii: Option<String>,
    /// Free-text semantics, e.g. "ISO-8601 date" or "GBP currency".
    #[serde(default)]
    pub semantics: Option<String>,
}

fn default_nullable() -> bool {
    true
}

fn default_pii() -> Option<String> {
    Some("none".to_string())
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>, dtype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dtype: dtype.into(),
            description: None,
            nullable: true,
            pii: default_pii(),
            semantics: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_pii(mut self, pii: impl Into<String>) -> Self {
        self.pii = Some(pii.into());
        self
    }

    pub fn with_semantics(mut self, semantics: impl Into<String>) -> Self {
        self.semantics = Some(semantics.into());
        self
    }
}

/// A foreign key reference such as `customer_id -> customers.customer_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub column: String,
    /// Target in `table.column` form.
    #[serde(rename = "ref")]
    pub reference: String,
}

impl ForeignKey {
    /// Splits the reference into `(table, column)`.
    pub fn target(&self) -> Option<(&str, &str)> {
        self.reference.split_once('.')
    }
}

/// Declaration of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub primary_key: Option<Vec<String>>,
    #[serde(default)]
    pub foreign_keys: Option<Vec<ForeignKey>>,
    pub columns: Vec<ColumnMeta>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnMeta>) -> Self {
        Self {
            name: name.into(),
            description: None,
            primary_key: None,
            foreign_keys: None,
            columns,
        }
    }

    /// Declared dtype of `column`, if the first declaration with that exact
    /// name exists.
    pub fn dtype_of(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|meta| meta.name == column)
            .map(|meta| meta.dtype.as_str())
    }

    pub fn is_primary_key(&self, column: &str) -> bool {
        self.primary_key
            .as_ref()
            .is_some_and(|keys| keys.iter().any(|key| key == column))
    }

    pub fn foreign_key_for(&self, column: &str) -> Option<&ForeignKey> {
        self.foreign_keys
            .as_ref()
            .and_then(|keys| keys.iter().find(|key| key.column == column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_meta_defaults() {
        let meta: ColumnMeta = serde_json::from_str(r#"{"name": "id", "dtype": "int"}"#).unwrap();
        assert!(meta.nullable);
        assert_eq!(meta.pii.as_deref(), Some("none"));
        assert!(meta.description.is_none());
    }

    #[test]
    fn dtype_lookup_uses_first_declaration() {
        let schema = TableSchema::new(
            "t",
            vec![ColumnMeta::new("a", "int"), ColumnMeta::new("a", "string")],
        );
        assert_eq!(schema.dtype_of("a"), Some("int"));
        assert_eq!(schema.dtype_of("A"), None);
    }

    #[test]
    fn foreign_key_target_split() {
        let fk = ForeignKey {
            column: "customer_id".to_string(),
            reference: "customers.customer_id".to_string(),
        };
        assert_eq!(fk.target(), Some(("customers", "customer_id")));
    }
}
