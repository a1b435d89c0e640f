//! Project schema definitions.

use serde::{Deserialize, Serialize};

/// A declarative description of one pipeline run: the datasets to build
/// flow graphs from, an optional merge joining two of them at an anchor
/// node, and the currency suffix for label annotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub datasets: Vec<DatasetDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergeDef>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// One tabular source and how to read a flow graph out of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetDef {
    pub id: String,
    /// CSV path, resolved relative to the project file's directory.
    pub path: String,
    /// Metric column name (e.g. a month).
    pub metric: String,
    /// Ordered category column names, coarsest first.
    pub categories: Vec<String>,
    /// Anchor injected before the first category: every row flows out of it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_anchor: Option<String>,
    /// Anchor injected after the last category: every row flows into it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_anchor: Option<String>,
}

/// Join two dataset graphs at one shared anchor node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergeDef {
    /// Dataset id of graph A.
    pub first: String,
    /// Dataset id of graph B (its anchor entry is absorbed into A's).
    pub second: String,
    /// Anchor node name in graph A.
    pub first_anchor: String,
    /// Anchor node name in graph B.
    pub second_anchor: String,
}

fn default_currency() -> String {
    "€".to_string()
}
