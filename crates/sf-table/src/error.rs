use thiserror::Error;

pub type TableResult<T> = Result<T, TableError>;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Duplicate column name: {name}")]
    DuplicateColumn { name: String },

    #[error("Row {row} has {actual} cells (expected {expected})")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Table has no columns")]
    NoColumns,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
