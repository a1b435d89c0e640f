//! Flow-total label annotation.

use crate::graph::FlowGraph;

/// Per-node flow totals: total outflow and total inflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTotals {
    pub total_out: f64,
    pub total_in: f64,
}

impl NodeTotals {
    /// A node's size in a flow diagram: the larger of its throughput in
    /// either direction. Handles pure sources, pure sinks, and pass-through
    /// nodes uniformly.
    pub fn throughput(&self) -> f64 {
        self.total_out.max(self.total_in)
    }
}

/// Compute out/in totals for every node.
pub fn node_totals(graph: &FlowGraph) -> Vec<NodeTotals> {
    let mut totals = vec![
        NodeTotals {
            total_out: 0.0,
            total_in: 0.0
        };
        graph.node_count()
    ];
    for edge in graph.edges() {
        totals[edge.source].total_out += edge.value;
        totals[edge.target].total_in += edge.value;
    }
    totals
}

/// Display labels annotated with each node's throughput, formatted as a
/// currency-suffixed value on a second line.
pub fn annotated_labels(graph: &FlowGraph, suffix: &str) -> Vec<String> {
    let totals = node_totals(graph);
    graph
        .labels()
        .iter()
        .zip(&totals)
        .map(|(label, t)| format!("{} \n{}{}", label, t.throughput(), suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FlowEdge;

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
    fn pure_source_and_sink() {
        let g = graph(&["Salary", "Total"], &[(0, 1, 500.0)]);
        let totals = node_totals(&g);

        // Pure source: outflow wins
        assert_eq!(totals[0].total_out, 500.0);
        assert_eq!(totals[0].total_in, 0.0);
        assert_eq!(totals[0].throughput(), 500.0);

        // Pure sink: inflow wins
        assert_eq!(totals[1].throughput(), 500.0);
    }

    #[test]
    fn pass_through_takes_larger_side() {
        // 100 in, 80 out of the middle node
        let g = graph(&["A", "Mid", "B"], &[(0, 1, 100.0), (1, 2, 80.0)]);
        let totals = node_totals(&g);
        assert_eq!(totals[1].total_in, 100.0);
        assert_eq!(totals[1].total_out, 80.0);
        assert_eq!(totals[1].throughput(), 100.0);
    }

    #[test]
    fn labels_carry_currency_suffix() {
        let g = graph(&["Total", "Food"], &[(0, 1, 100.0)]);
        let labels = annotated_labels(&g, "€");
        assert_eq!(labels, vec!["Total \n100€", "Food \n100€"]);
    }

    #[test]
    fn fractional_totals_format_plainly() {
        let g = graph(&["A", "B"], &[(0, 1, 80.5)]);
        let labels = annotated_labels(&g, "€");
        assert_eq!(labels[0], "A \n80.5€");
    }

    #[test]
    fn isolated_node_annotates_zero() {
        let g = graph(&["A", "B", "Lonely"], &[(0, 1, 5.0)]);
        let labels = annotated_labels(&g, "€");
        assert_eq!(labels[2], "Lonely \n0€");
    }
}
