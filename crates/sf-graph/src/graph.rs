//! Core flow-graph data structures.

use std::collections::HashMap;

use sf_core::ensure_finite;

use crate::error::{GraphError, GraphResult};

/// A directed weighted edge between two node indices.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

/// A directed weighted flow graph: an ordered label sequence plus edges
/// referencing indices into it.
///
/// Each pipeline stage consumes a graph and returns a freshly built one;
/// no stage mutates another stage's output. The graph owns an explicit
/// name -> index map so anchor lookups never fall back to a linear scan.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    pub(crate) labels: Vec<String>,
    pub(crate) label_to_index: HashMap<String, usize>,
    pub(crate) edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// Build a graph from labels and edges, validating the invariants:
    /// labels are unique, every edge index is in bounds, every weight is
    /// finite.
    pub fn new(labels: Vec<String>, edges: Vec<FlowEdge>) -> GraphResult<Self> {
        let mut label_to_index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if label_to_index.insert(label.clone(), i).is_some() {
                return Err(GraphError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        for (k, edge) in edges.iter().enumerate() {
            for index in [edge.source, edge.target] {
                if index >= labels.len() {
                    return Err(GraphError::EdgeIndexOob {
                        edge: k,
                        index,
                        len: labels.len(),
                    });
                }
            }
            ensure_finite(edge.value, "edge weight")?;
        }

        Ok(Self {
            labels,
            label_to_index,
            edges,
        })
    }

    /// Construct from parts whose invariants are already established.
    ///
    /// A merged graph may carry duplicate display names across its two
    /// halves; the map then resolves a name to its first occurrence.
    pub(crate) fn from_parts(labels: Vec<String>, edges: Vec<FlowEdge>) -> Self {
        let mut label_to_index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            label_to_index.entry(label.clone()).or_insert(i);
        }
        Self {
            labels,
            label_to_index,
            edges,
        }
    }

    /// Ordered node labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// All edges.
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Index of a node by display name.
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.label_to_index.get(name).copied()
    }

    /// Index of a node by display name, as a fatal lookup.
    pub fn require_node(&self, name: &str) -> GraphResult<usize> {
        self.node_index(name).ok_or_else(|| GraphError::AnchorNotFound {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_validates_and_indexes() {
        let graph = FlowGraph::new(
            labels(&["Total", "Food"]),
            vec![FlowEdge {
                source: 0,
                target: 1,
                value: 100.0,
            }],
        )
        .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_index("Food"), Some(1));
        assert!(graph.node_index("Rent").is_none());
        assert!(graph.require_node("Rent").is_err());
    }

    #[test]
    fn new_rejects_duplicate_labels() {
        let err = FlowGraph::new(labels(&["A", "A"]), vec![]).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateLabel { .. }));
    }

    #[test]
    fn new_rejects_out_of_bounds_edges() {
        let err = FlowGraph::new(
            labels(&["A"]),
            vec![FlowEdge {
                source: 0,
                target: 3,
                value: 1.0,
            }],
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::EdgeIndexOob { index: 3, .. }));
    }

    #[test]
    fn new_rejects_non_finite_weights() {
        let err = FlowGraph::new(
            labels(&["A", "B"]),
            vec![FlowEdge {
                source: 0,
                target: 1,
                value: f64::NAN,
            }],
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::Core(_)));
    }

    #[test]
    fn from_parts_keeps_first_occurrence_on_duplicates() {
        let graph = FlowGraph::from_parts(labels(&["Total", "Food", "Food"]), vec![]);
        assert_eq!(graph.node_index("Food"), Some(1));
        assert_eq!(graph.labels().len(), 3);
    }
}
