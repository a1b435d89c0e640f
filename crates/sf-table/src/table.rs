//! In-memory rectangular table.

use std::collections::HashMap;

use sf_core::Cell;

use crate::error::{TableError, TableResult};

/// A validated, immutable table of cells addressable by column name.
///
/// The table stores:
/// - The ordered column names and a name -> position map.
/// - Rows as vectors of [`Cell`]s, all of the same width.
///
/// Rows are never mutated after construction; the flow-graph core reads
/// them through [`Table::row`] and [`Table::column_index`].
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    col_index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from column names and rows, validating the shape.
    ///
    /// Fails on an empty column list, duplicate column names, or rows whose
    /// width differs from the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> TableResult<Self> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }

        let mut col_index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if col_index.insert(name.clone(), i).is_some() {
                return Err(TableError::DuplicateColumn { name: name.clone() });
            }
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns.len() {
                return Err(TableError::RaggedRow {
                    row,
                    expected: columns.len(),
                    actual: cells.len(),
                });
            }
        }

        Ok(Self {
            columns,
            col_index,
            rows,
        })
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.col_index.get(name).copied()
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.col_index.contains_key(name)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get one row's cells (panics if out of bounds, like slice indexing).
    pub fn row(&self, i: usize) -> &[Cell] {
        &self.rows[i]
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}
