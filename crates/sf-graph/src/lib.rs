//! sf-graph: flow-graph construction, aggregation, and merge pipeline.
//!
//! Provides:
//! - Core graph data structures ([`FlowEdge`], [`FlowGraph`])
//! - First-occurrence label indexing ([`LabelIndex`])
//! - Chain-edge extraction from tabular rows ([`build_graph`])
//! - Parallel-edge aggregation ([`aggregate`])
//! - Anchor-unifying merge of two graphs ([`merge`])
//! - Flow-total label annotation ([`annotated_labels`])
//!
//! # Example
//!
//! ```
//! use sf_core::Cell;
//! use sf_graph::{BuildSpec, aggregate, build_graph};
//! use sf_table::Table;
//!
//! let table = Table::new(
//!     vec!["cat1".into(), "cat2".into(), "Jan".into()],
//!     vec![
//!         vec![Cell::from("Food"), Cell::from("Groceries"), Cell::from(50.0)],
//!         vec![Cell::from("Food"), Cell::Missing, Cell::from(20.0)],
//!     ],
//! )
//! .unwrap();
//!
//! let spec = BuildSpec::new("Jan", vec!["cat1".into(), "cat2".into()])
//!     .with_start_anchor("Total");
//! let graph = aggregate(&build_graph(&table, &spec).unwrap());
//!
//! assert_eq!(graph.labels(), &["Total", "Food", "Groceries"]);
//! assert_eq!(graph.edge_count(), 2);
//! ```

pub mod aggregate;
pub mod annotate;
pub mod builder;
pub mod error;
pub(crate) mod extract;
pub mod graph;
pub mod labels;
pub mod merge;

// Re-exports for ergonomics
pub use aggregate::aggregate;
pub use annotate::{NodeTotals, annotated_labels, node_totals};
pub use builder::{AnchorMode, AnchorSpec, BuildSpec, build_graph};
pub use error::{GraphError, GraphResult};
pub use graph::{FlowEdge, FlowGraph};
pub use labels::LabelIndex;
pub use merge::merge;
