//! Anchor-unifying graph merge.

use crate::error::GraphResult;
use crate::graph::{FlowEdge, FlowGraph};

/// Merge two graphs into one by unifying an anchor node of each.
///
/// The anchor entry is removed from B's labels and its role absorbed by A's
/// anchor; every index of B's edges is remapped into the combined index
/// space. The anchor's actual position in B is looked up, not assumed to be
/// 0 (for an anchor at B-index 0 the remap reduces to a plain
/// `|A.labels| - 1` offset).
///
/// The merged graph has `|A.labels| + |B.labels| - 1` nodes and
/// `|A.edges| + |B.edges|` edges, in concatenation order. Merge operates
/// purely on indices: it neither removes nor introduces self-loops.
pub fn merge(
    a: &FlowGraph,
    anchor_a: &str,
    b: &FlowGraph,
    anchor_b: &str,
) -> GraphResult<FlowGraph> {
    let pa = a.require_node(anchor_a)?;
    let pb = b.require_node(anchor_b)?;

    let base = a.labels.len();
    let remap = |x: usize| -> usize {
        if x == pb {
            pa
        } else if x > pb {
            base + x - 1
        } else {
            base + x
        }
    };

    let mut labels = a.labels.clone();
    labels.extend(
        b.labels
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != pb)
            .map(|(_, l)| l.clone()),
    );

    let mut edges = a.edges.clone();
    edges.extend(b.edges.iter().map(|e| FlowEdge {
        source: remap(e.source),
        target: remap(e.target),
        value: e.value,
    }));

    Ok(FlowGraph::from_parts(labels, edges))
}
