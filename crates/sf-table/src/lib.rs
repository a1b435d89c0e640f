//! sf-table: column-addressable tabular input boundary.
//!
//! Provides:
//! - An in-memory, read-only [`Table`] with named columns and [`Cell`] rows
//! - A CSV adapter mapping empty fields to missing cells
//!
//! The flow-graph core only ever sees a `Table`; where the rows came from
//! (CSV here, anything else upstream) is not its concern.
//!
//! [`Cell`]: sf_core::Cell

pub mod error;
pub mod reader;
pub mod table;

pub use error::{TableError, TableResult};
pub use reader::{read_csv, read_csv_path};
pub use table::Table;
