//! Renderer-facing export shape.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sf_graph::FlowGraph;

use crate::error::AppResult;

/// Four parallel sequences describing a flow diagram: `source[k] ->
/// target[k]` carries `values[k]`, and every index is a valid offset into
/// `labels`. This is the shape a Sankey renderer consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SankeyData {
    pub labels: Vec<String>,
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub values: Vec<f64>,
}

impl SankeyData {
    /// Split a graph into the parallel sequences, using the given display
    /// labels (typically the annotated ones) in place of the raw names.
    pub fn from_graph(graph: &FlowGraph, labels: Vec<String>) -> Self {
        let mut source = Vec::with_capacity(graph.edge_count());
        let mut target = Vec::with_capacity(graph.edge_count());
        let mut values = Vec::with_capacity(graph.edge_count());
        for edge in graph.edges() {
            source.push(edge.source);
            target.push(edge.target);
            values.push(edge.value);
        }
        Self {
            labels,
            source,
            target,
            values,
        }
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.source.len()
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty JSON to a file.
    pub fn write_json(&self, path: &Path) -> AppResult<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}
