//! CSV adapter.
//!
//! Maps the first record to column names and every field after that through
//! [`Cell::parse`], so empty fields arrive at the core as `Cell::Missing`.

use std::io::Read;
use std::path::Path;

use sf_core::Cell;

use crate::error::TableResult;
use crate::table::Table;

/// Read a table from any CSV source.
pub fn read_csv<R: Read>(source: R) -> TableResult<Table> {
    let mut reader = csv::Reader::from_reader(source);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::parse).collect());
    }

    Table::new(columns, rows)
}

/// Read a table from a CSV file on disk.
pub fn read_csv_path(path: &Path) -> TableResult<Table> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_csv_maps_empty_fields_to_missing() {
        let data = "cat1,cat2,Jan\nFood,Groceries,50\nFood,,20\n";
        let table = read_csv(data.as_bytes()).unwrap();

        assert_eq!(table.columns(), &["cat1", "cat2", "Jan"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(0)[0], Cell::Text("Food".into()));
        assert_eq!(table.row(0)[2], Cell::Number(50.0));
        assert!(table.row(1)[1].is_missing());
    }

    #[test]
    fn read_csv_trims_headers() {
        let data = " cat1 , Jan \nFood,10\n";
        let table = read_csv(data.as_bytes()).unwrap();
        assert!(table.has_column("cat1"));
        assert!(table.has_column("Jan"));
    }
}
