//! Graph-specific error types.

use sf_core::CoreError;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Flow-graph construction and merge errors.
///
/// Missing cells are not errors anywhere in this crate; they are handled by
/// the extraction skip rules. Everything below is fatal and aborts the
/// current build or merge call with no partial result.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A build was requested with an empty category list.
    #[error("Category list is empty")]
    EmptyCategories,

    /// The metric or a category column is absent from the table schema.
    #[error("Column not found in table schema: {column}")]
    ColumnNotFound { column: String },

    /// A category value was not present in the node index. Structurally
    /// impossible when index and extraction scan the same rows; guarded
    /// anyway.
    #[error("Label not found in node index: {label}")]
    LabelNotFound { label: String },

    /// An anchor name was absent from a graph's labels during merge.
    #[error("Anchor node not found: {name}")]
    AnchorNotFound { name: String },

    /// Two nodes in one graph carry the same display name.
    #[error("Duplicate node label: {label}")]
    DuplicateLabel { label: String },

    /// An edge references a node index outside the label list.
    #[error("Edge {edge} references node {index} (graph has {len} nodes)")]
    EdgeIndexOob {
        edge: usize,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
