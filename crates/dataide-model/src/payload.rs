use serde::{Deserialize, Serialize};

use crate::chart::SuggestedChart;
use crate::error::Result;
use crate::profile::ProfilingSummary;
use crate::schema::TableSchema;
use crate::value::SampleTables;

/// Complete dataset description exchanged between suppliers, the profiler
/// and exporters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetPayload {
    pub dataset_description: String,
    #[serde(default)]
    pub tables: Vec<TableSchema>,
    /// Mermaid `erDiagram` block.
    #[serde(default)]
    pub mermaid_erd: String,
    #[serde(default)]
    pub sample_rows: SampleTables,
    #[serde(default)]
    pub profiling_summary: ProfilingSummary,
    #[serde(default)]
    pub suggested_charts: Vec<SuggestedChart>,
    #[serde(default)]
    pub caveats: Option<Vec<String>>,
}

impl DatasetPayload {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn push_caveat(&mut self, caveat: impl Into<String>) {
        self.caveats.get_or_insert_with(Vec::new).push(caveat.into());
    }

    pub fn table_schema(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|table| table.name == name)
    }
}
