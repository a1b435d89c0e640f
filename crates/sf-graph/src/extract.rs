//! Per-row chain-edge extraction.
//!
//! A row's non-missing category values form a chain; each consecutive pair
//! becomes one directed edge weighted by the row's metric value. Missing
//! positions are skipped and never interrupt a chain; rows with a missing
//! (or non-numeric) metric contribute nothing.

use std::borrow::Cow;
use std::iter::FusedIterator;

use sf_core::Cell;
use sf_table::Table;

use crate::builder::{AnchorMode, BuildSpec};
use crate::error::{GraphError, GraphResult};
use crate::graph::FlowEdge;
use crate::labels::LabelIndex;

/// One position in the anchor-extended category sequence.
#[derive(Debug, Clone)]
pub(crate) enum CategorySource {
    /// A real table column, by resolved position.
    Column(usize),
    /// The synthetic anchor category; every row carries this name.
    Anchor(String),
}

/// The ordered category positions a build scans, with column names already
/// resolved against the table schema and the optional anchor injected.
#[derive(Debug, Clone)]
pub(crate) struct CategoryView {
    sources: Vec<CategorySource>,
    metric_col: usize,
}

impl CategoryView {
    /// Resolve a build spec against a table schema.
    ///
    /// Fails fast on an empty category list or any column (metric or
    /// category) absent from the schema.
    pub(crate) fn resolve(table: &Table, spec: &BuildSpec) -> GraphResult<Self> {
        if spec.categories.is_empty() {
            return Err(GraphError::EmptyCategories);
        }

        let metric_col =
            table
                .column_index(&spec.metric)
                .ok_or_else(|| GraphError::ColumnNotFound {
                    column: spec.metric.clone(),
                })?;

        let mut sources = Vec::with_capacity(spec.categories.len() + 1);
        for name in &spec.categories {
            let col = table
                .column_index(name)
                .ok_or_else(|| GraphError::ColumnNotFound {
                    column: name.clone(),
                })?;
            sources.push(CategorySource::Column(col));
        }

        if let Some(anchor) = &spec.anchor {
            match anchor.mode {
                AnchorMode::Start => {
                    sources.insert(0, CategorySource::Anchor(anchor.name.clone()));
                }
                AnchorMode::End => {
                    sources.push(CategorySource::Anchor(anchor.name.clone()));
                }
            }
        }

        Ok(Self {
            sources,
            metric_col,
        })
    }

    /// Number of category positions (anchor included).
    pub(crate) fn positions(&self) -> usize {
        self.sources.len()
    }

    /// The label at a position of a row, or `None` if that cell is missing.
    pub(crate) fn label_at<'a>(&'a self, row: &'a [Cell], pos: usize) -> Option<Cow<'a, str>> {
        match &self.sources[pos] {
            CategorySource::Column(col) => row[*col].as_label(),
            CategorySource::Anchor(name) => Some(Cow::Borrowed(name.as_str())),
        }
    }

    /// The row's metric value, if present and numeric.
    pub(crate) fn metric(&self, row: &[Cell]) -> Option<f64> {
        row[self.metric_col].as_number()
    }
}

/// Lazy per-row edge sequence: finite, fused, consumed once.
///
/// Walks the category positions left to right. At each non-missing position
/// `i` it scans forward for the first non-missing position `j`, emits
/// `index(i) -> index(j)` weighted by the row's metric, then resumes the
/// source search at `j`. Consecutive repeats of the same value would form a
/// zero-length loop and are dropped instead of emitted.
pub(crate) struct ChainEdges<'a> {
    view: &'a CategoryView,
    index: &'a LabelIndex,
    row: &'a [Cell],
    metric: Option<f64>,
    pos: usize,
    done: bool,
}

impl<'a> ChainEdges<'a> {
    pub(crate) fn new(view: &'a CategoryView, index: &'a LabelIndex, row: &'a [Cell]) -> Self {
        let metric = view.metric(row);
        Self {
            view,
            index,
            row,
            metric,
            pos: 0,
            // A missing metric overrides everything: the row yields no edges.
            done: metric.is_none(),
        }
    }

    fn resolve(&mut self, label: &str) -> GraphResult<usize> {
        match self.index.resolve(label) {
            Ok(i) => Ok(i),
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }
}

impl Iterator for ChainEdges<'_> {
    type Item = GraphResult<FlowEdge>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let value = self.metric?;
        let len = self.view.positions();

        loop {
            // Next non-missing position is the source.
            let mut i = self.pos;
            let src_label = loop {
                if i >= len {
                    self.done = true;
                    return None;
                }
                match self.view.label_at(self.row, i) {
                    Some(label) => break label,
                    None => i += 1,
                }
            };

            // First non-missing position after it is the target; without
            // one the source is terminal for this row.
            let mut j = i + 1;
            let tgt_label = loop {
                if j >= len {
                    self.done = true;
                    return None;
                }
                match self.view.label_at(self.row, j) {
                    Some(label) => break label,
                    None => j += 1,
                }
            };

            let source = match self.resolve(&src_label) {
                Ok(v) => v,
                Err(e) => return Some(Err(e)),
            };
            let target = match self.resolve(&tgt_label) {
                Ok(v) => v,
                Err(e) => return Some(Err(e)),
            };

            // Source search resumes at the discovered target.
            self.pos = j;

            if source == target {
                // Self-loop suppressed; its weight is dropped, not re-routed.
                continue;
            }

            return Some(Ok(FlowEdge {
                source,
                target,
                value,
            }));
        }
    }
}

impl FusedIterator for ChainEdges<'_> {}
