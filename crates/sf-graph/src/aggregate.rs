//! Parallel-edge aggregation.

use std::collections::HashMap;

use crate::graph::{FlowEdge, FlowGraph};

/// Collapse parallel edges: each distinct (source, target) pair appears
/// exactly once, weighted by the sum of all contributions. Labels pass
/// through unchanged.
///
/// The output is sorted by (source, target) so the result is deterministic
/// for a given input; callers must not rely on any particular order.
pub fn aggregate(graph: &FlowGraph) -> FlowGraph {
    let mut sums: HashMap<(usize, usize), f64> = HashMap::new();
    for edge in &graph.edges {
        *sums.entry((edge.source, edge.target)).or_insert(0.0) += edge.value;
    }

    let mut pairs: Vec<((usize, usize), f64)> = sums.into_iter().collect();
    pairs.sort_unstable_by_key(|&(key, _)| key);

    let edges = pairs
        .into_iter()
        .map(|((source, target), value)| FlowEdge {
            source,
            target,
            value,
        })
        .collect();

    FlowGraph::from_parts(graph.labels.clone(), edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{Tolerances, nearly_equal};

    fn graph(labels: &[&str], edges: &[(usize, usize, f64)]) -> FlowGraph {
        FlowGraph::new(
            labels.iter().map(|s| s.to_string()).collect(),
            edges
                .iter()
                .map(|&(source, target, value)| FlowEdge {
                    source,
                    target,
                    value,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn sums_parallel_edges() {
        let g = graph(
            &["Total", "Food", "Groceries"],
            &[
                (0, 1, 50.0),
                (1, 2, 50.0),
                (0, 1, 30.0),
                (1, 2, 30.0),
                (0, 1, 20.0),
            ],
        );
        let agg = aggregate(&g);

        assert_eq!(agg.edge_count(), 2);
        assert_eq!(agg.labels(), g.labels());
        let pairs: Vec<_> = agg
            .edges()
            .iter()
            .map(|e| (e.source, e.target, e.value))
            .collect();
        assert_eq!(pairs, vec![(0, 1, 100.0), (1, 2, 80.0)]);
    }

    #[test]
    fn idempotent() {
        let g = graph(&["A", "B", "C"], &[(0, 1, 1.5), (0, 1, 2.5), (1, 2, 4.0)]);
        let once = aggregate(&g);
        let twice = aggregate(&once);
        assert_eq!(once.edges(), twice.edges());
        assert_eq!(once.labels(), twice.labels());
    }

    #[test]
    fn empty_graph_passes_through() {
        let g = graph(&[], &[]);
        let agg = aggregate(&g);
        assert_eq!(agg.node_count(), 0);
        assert_eq!(agg.edge_count(), 0);
    }

    #[test]
    fn total_weight_conserved() {
        let g = graph(
            &["A", "B"],
            &[(0, 1, 0.1), (0, 1, 0.2), (1, 0, 0.3), (0, 1, 0.4)],
        );
        let before: f64 = g.edges().iter().map(|e| e.value).sum();
        let after: f64 = aggregate(&g).edges().iter().map(|e| e.value).sum();
        assert!(nearly_equal(before, after, Tolerances::default()));
    }
}
