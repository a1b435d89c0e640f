//! Graph construction from a table.

use sf_table::Table;

use crate::error::GraphResult;
use crate::extract::{CategoryView, ChainEdges};
use crate::graph::{FlowEdge, FlowGraph};
use crate::labels::LabelIndex;

/// Where a synthetic anchor category is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMode {
    /// Every row implicitly flows out of the anchor (prepended position).
    Start,
    /// Every row implicitly flows into the anchor (appended position).
    End,
}

/// A synthetic anchor category applied uniformly to every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSpec {
    pub mode: AnchorMode,
    pub name: String,
}

/// Configuration for one graph-build invocation: the metric column, the
/// ordered category columns, and at most one anchor injection.
///
/// Start-anchor and end-anchor can never both be requested; the single
/// `Option<AnchorSpec>` makes that state unrepresentable here, and the
/// project-file layer rejects configs that ask for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSpec {
    pub metric: String,
    pub categories: Vec<String>,
    pub anchor: Option<AnchorSpec>,
}

impl BuildSpec {
    /// Spec with no anchor.
    pub fn new(metric: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            metric: metric.into(),
            categories,
            anchor: None,
        }
    }

    /// Inject a start anchor (replaces any previous anchor choice).
    pub fn with_start_anchor(mut self, name: impl Into<String>) -> Self {
        self.anchor = Some(AnchorSpec {
            mode: AnchorMode::Start,
            name: name.into(),
        });
        self
    }

    /// Inject an end anchor (replaces any previous anchor choice).
    pub fn with_end_anchor(mut self, name: impl Into<String>) -> Self {
        self.anchor = Some(AnchorSpec {
            mode: AnchorMode::End,
            name: name.into(),
        });
        self
    }
}

/// Build a raw (unaggregated) flow graph from a table.
///
/// The label index is built from the full anchor-extended category view
/// over every row first; extraction then walks the rows and collects chain
/// edges. Parallel edges are kept as-is; [`aggregate`] collapses them.
///
/// [`aggregate`]: crate::aggregate::aggregate
pub fn build_graph(table: &Table, spec: &BuildSpec) -> GraphResult<FlowGraph> {
    let view = CategoryView::resolve(table, spec)?;
    let index = LabelIndex::from_table(table, &view);

    let mut edges: Vec<FlowEdge> = Vec::new();
    for row in table.rows() {
        for edge in ChainEdges::new(&view, &index, row) {
            edges.push(edge?);
        }
    }

    // Indices come from the index itself and weights from finite metric
    // cells, so the graph invariants already hold.
    Ok(FlowGraph::from_parts(index.into_labels(), edges))
}
