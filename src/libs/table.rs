//! Backend-neutral tabular result.
//!
//! Every report produces a [`Table`]: an ordered list of column names and an
//! ordered list of rows whose cells are optional strings. The renderer and the
//! exporters only ever see this structure, so they work the same against any
//! database client.
//!
//! ## Usage
//!
//! ```rust
//! use devtrack::libs::table::Table;
//!
//! let mut table = Table::new(vec!["name".into(), "total_minutes".into()]);
//! table.push_row(vec![Some("Alpha".into()), Some("150".into())]);
//! table.push_row(vec![Some("Gamma".into()), None]);
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.cell(1, "total_minutes"), None);
//! ```

use serde::Serialize;

/// Ordered column names plus rows of optional text cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Appends a row. The row must have one cell per column.
    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Returns the text of a cell by row index and column name.
    ///
    /// `None` covers a missing row, an unknown column and a NULL cell alike.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)?.as_deref()
    }

    /// Collects the values of one column, preserving row order.
    pub fn column(&self, column: &str) -> Vec<Option<&str>> {
        match self.column_index(column) {
            Some(index) => self.rows.iter().map(|row| row.get(index).and_then(|c| c.as_deref())).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec!["name".to_string(), "total".to_string()]);
        table.push_row(vec![Some("Alpha".to_string()), Some("150".to_string())]);
        table.push_row(vec![Some("Gamma".to_string()), None]);
        table
    }

    #[test]
    fn test_cell_lookup() {
        let table = sample();
        assert_eq!(table.cell(0, "name"), Some("Alpha"));
        assert_eq!(table.cell(0, "total"), Some("150"));
        assert_eq!(table.cell(1, "total"), None);
        assert_eq!(table.cell(5, "name"), None);
        assert_eq!(table.cell(0, "missing"), None);
    }

    #[test]
    fn test_column_values() {
        let table = sample();
        assert_eq!(table.column("name"), vec![Some("Alpha"), Some("Gamma")]);
        assert_eq!(table.column("total"), vec![Some("150"), None]);
        assert!(table.column("missing").is_empty());
    }
}
