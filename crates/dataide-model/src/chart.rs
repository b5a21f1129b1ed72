//! Suggested chart specifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of visualization.
///
/// Kinds are open strings in practice; unknown kinds round-trip verbatim
/// through [`ChartKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    Histogram,
    Bar,
    Line,
    Scatter,
    Box,
    Other(String),
}

impl ChartKind {
    pub fn as_str(&self) -> &str {
        match self {
            ChartKind::Histogram => "hist",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Box => "box",
            ChartKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ChartKind {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "hist" | "histogram" => ChartKind::Histogram,
            "bar" => ChartKind::Bar,
            "line" => ChartKind::Line,
            "scatter" => ChartKind::Scatter,
            "box" => ChartKind::Box,
            _ => ChartKind::Other(value),
        }
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed visualization over one sample table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedChart {
    pub title: String,
    pub kind: ChartKind,
    pub table: String,
    pub x: String,
    #[serde(default)]
    pub y: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl SuggestedChart {
    pub fn new(
        title: impl Into<String>,
        kind: ChartKind,
        table: impl Into<String>,
        x: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind,
            table: table.into(),
            x: x.into(),
            y: None,
            note: None,
        }
    }

    pub fn with_y(mut self, y: impl Into<String>) -> Self {
        self.y = Some(y.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_aliases_and_unknowns() {
        let kinds: Vec<ChartKind> =
            serde_json::from_str(r#"["hist", "histogram", "BAR", "pie"]"#).unwrap();
        assert_eq!(kinds[0], ChartKind::Histogram);
        assert_eq!(kinds[1], ChartKind::Histogram);
        assert_eq!(kinds[2], ChartKind::Bar);
        assert_eq!(kinds[3], ChartKind::Other("pie".to_string()));
        assert_eq!(serde_json::to_string(&kinds[3]).unwrap(), r#""pie""#);
    }

    #[test]
    fn chart_serializes_optional_axes_as_null() {
        let chart = SuggestedChart::new("t.a distribution", ChartKind::Histogram, "t", "a");
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "hist");
        assert!(json["y"].is_null());
        assert!(json["note"].is_null());
    }
}
