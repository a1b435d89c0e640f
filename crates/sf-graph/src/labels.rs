//! First-occurrence node label indexing.
//!
//! Every distinct non-missing category value gets a stable integer index in
//! the order it is first seen scanning rows top to bottom and category
//! positions left to right. The index is built over the full anchor-extended
//! category view before any extraction runs, so extraction lookups cannot
//! miss.

use std::collections::HashMap;

use sf_table::Table;

use crate::error::{GraphError, GraphResult};
use crate::extract::CategoryView;

/// Ordered set of distinct node labels with O(1) bidirectional lookup.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a table through a category view, collecting all distinct
    /// non-missing labels in first-occurrence order.
    ///
    /// Rows with a missing metric still contribute labels; only edge
    /// extraction filters on the metric.
    pub(crate) fn from_table(table: &Table, view: &CategoryView) -> Self {
        let mut index = Self::new();
        for row in table.rows() {
            for pos in 0..view.positions() {
                if let Some(label) = view.label_at(row, pos) {
                    index.get_or_insert(&label);
                }
            }
        }
        index
    }

    /// Index of a label, inserting it at the next position if unseen.
    pub fn get_or_insert(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), i);
        i
    }

    /// Index of a label, if present.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Index of a label, as a fatal lookup.
    pub fn resolve(&self, label: &str) -> GraphResult<usize> {
        self.get(label).ok_or_else(|| GraphError::LabelNotFound {
            label: label.to_string(),
        })
    }

    /// Reverse lookup: label at an index.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|s| s.as_str())
    }

    /// Ordered labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Consume the index into its ordered label list.
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }
}
