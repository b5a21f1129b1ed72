//! Loosely-typed sample values.
//!
//! Sample rows arrive as open JSON-like mappings. Every cell is normalized
//! into the closed [`CellValue`] variant at ingestion so downstream code can
//! pattern-match instead of inspecting runtime types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Result;

/// A single sample cell.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value (JSON `null` or an absent key).
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

/// One sample row: column name to value, in insertion order.
pub type Row = IndexMap<String, CellValue>;

/// Named sample tables, in insertion order.
pub type SampleTables = IndexMap<String, Vec<Row>>;

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// String form used for frequency counts and CSV output.
    ///
    /// Returns `None` for [`CellValue::Null`]. Integral numbers print without
    /// a fractional part.
    pub fn display_string(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(value) => Some(value.to_string()),
            CellValue::Number(value) => Some(format_number(*value)),
            CellValue::Text(value) => Some(value.clone()),
        }
    }
}

/// Formats a number for display; `f64`'s `Display` already drops `.0`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_none(),
            CellValue::Bool(value) => serializer.serialize_bool(*value),
            CellValue::Number(value) => {
                // Keep integers as JSON integers on the way back out.
                if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
                    serializer.serialize_i64(*value as i64)
                } else {
                    serializer.serialize_f64(*value)
                }
            }
            CellValue::Text(value) => serializer.serialize_str(value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

/// Parses a JSON array of row objects, keeping each row's key order.
///
/// Nested arrays or objects inside a row are rejected.
pub fn rows_from_json(json: &str) -> Result<Vec<Row>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_each_variant() {
        let rows = rows_from_json(r#"[{"a": null, "b": true, "c": 1.5, "d": "x"}]"#).unwrap();
        let row = &rows[0];
        assert_eq!(row["a"], CellValue::Null);
        assert_eq!(row["b"], CellValue::Bool(true));
        assert_eq!(row["c"], CellValue::Number(1.5));
        assert_eq!(row["d"], CellValue::Text("x".to_string()));
    }

    #[test]
    fn rejects_nested_values() {
        assert!(rows_from_json(r#"[{"a": {"nested": 1}}]"#).is_err());
        assert!(rows_from_json(r#"[{"a": [1, 2]}]"#).is_err());
    }

    #[test]
    fn preserves_key_order() {
        let rows = rows_from_json(r#"[{"z": 1, "a": 2, "m": 3}]"#).unwrap();
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn integral_numbers_serialize_as_integers() {
        let json = serde_json::to_string(&CellValue::Number(3.0)).unwrap();
        assert_eq!(json, "3");
        let json = serde_json::to_string(&CellValue::Number(2.5)).unwrap();
        assert_eq!(json, "2.5");
    }

    #[test]
    fn display_string_forms() {
        assert_eq!(CellValue::Null.display_string(), None);
        assert_eq!(CellValue::Number(5.0).display_string().as_deref(), Some("5"));
        assert_eq!(CellValue::Bool(false).display_string().as_deref(), Some("false"));
        assert_eq!(CellValue::from("x").display_string().as_deref(), Some("x"));
    }
}
