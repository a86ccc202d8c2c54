//! Console rendering of tabular results.
//!
//! The default [`OutputFormat::Fixed`] layout is a header of left-aligned,
//! padded column names, a dashed separator, one padded line per row and a
//! trailing row count:
//!
//! ```text
//! name                total_minutes
//! ------------------------------------------------------------
//! Alpha               150
//! Gamma
//!
//! (2 rows)
//! ```
//!
//! NULL cells render as empty strings. Values longer than the column width are
//! printed whole and push the rest of the line to the right.

use super::export;
use super::messages::Message;
use super::table::Table;
use anyhow::Result;
use clap::ValueEnum;
use prettytable::{Cell, Row, Table as PrettyTable};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLUMN_WIDTH: usize = 20;
const MIN_SEPARATOR_WIDTH: usize = 60;

/// How report results are written to the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width columns with a trailing row count
    #[default]
    Fixed,
    /// Boxed terminal table
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array of objects keyed by column name
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [OutputFormat::Fixed, OutputFormat::Table, OutputFormat::Csv, OutputFormat::Json];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Fixed => "fixed",
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

pub struct View {}

impl View {
    /// Prints a table in the requested format.
    pub fn table(table: &Table, format: OutputFormat, column_width: usize) -> Result<()> {
        match format {
            OutputFormat::Fixed => print!("{}", Self::render_fixed(table, column_width)),
            OutputFormat::Table => {
                Self::boxed(table).printstd();
                println!("\n{}", Message::RowsReturned(table.len()));
            }
            OutputFormat::Csv => print!("{}", export::to_csv(table)?),
            OutputFormat::Json => println!("{}", export::to_json(table)?),
        }

        Ok(())
    }

    /// Renders the fixed-width layout.
    pub fn render_fixed(table: &Table, column_width: usize) -> String {
        let mut out = String::new();

        let header = table.columns.iter().map(|c| format!("{:<width$}", c, width = column_width)).collect::<String>();
        out.push_str(&header);
        out.push('\n');

        let separator_width = (column_width * table.columns.len()).max(MIN_SEPARATOR_WIDTH);
        out.push_str(&"-".repeat(separator_width));
        out.push('\n');

        for row in &table.rows {
            let line = row
                .iter()
                .map(|cell| format!("{:<width$}", cell.as_deref().unwrap_or(""), width = column_width))
                .collect::<String>();
            out.push_str(&line);
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&Message::RowsReturned(table.len()).to_string());
        out.push('\n');
        out
    }

    fn boxed(table: &Table) -> PrettyTable {
        let mut pretty = PrettyTable::new();
        pretty.set_titles(Row::new(table.columns.iter().map(|c| Cell::new(c)).collect()));
        for row in &table.rows {
            pretty.add_row(Row::new(row.iter().map(|cell| Cell::new(cell.as_deref().unwrap_or(""))).collect()));
        }
        pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Table {
        let mut table = Table::new(vec!["name".to_string(), "total_minutes".to_string()]);
        table.push_row(vec![Some("Alpha".to_string()), Some("150".to_string())]);
        table.push_row(vec![Some("Gamma".to_string()), None]);
        table
    }

    #[test]
    fn test_render_fixed_layout() {
        let rendered = View::render_fixed(&projects(), DEFAULT_COLUMN_WIDTH);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], format!("{:<20}{:<20}", "name", "total_minutes"));
        assert_eq!(lines[1], "-".repeat(60));
        assert_eq!(lines[2], format!("{:<20}{:<20}", "Alpha", "150"));
        assert_eq!(lines[3], format!("{:<20}{:<20}", "Gamma", ""));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "(2 rows)");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_render_fixed_empty_table() {
        let table = Table::new(vec!["nickname".to_string(), "avg_minutes".to_string()]);
        let rendered = View::render_fixed(&table, DEFAULT_COLUMN_WIDTH);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0].trim_end(), format!("{:<20}{}", "nickname", "avg_minutes"));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "(0 rows)");
    }

    #[test]
    fn test_render_fixed_separator_grows_with_columns() {
        let columns = (0..4).map(|i| format!("c{}", i)).collect();
        let table = Table::new(columns);
        let rendered = View::render_fixed(&table, 20);
        assert_eq!(rendered.lines().nth(1), Some("-".repeat(80).as_str()));
    }

    #[test]
    fn test_render_fixed_custom_width() {
        let rendered = View::render_fixed(&projects(), 8);
        assert_eq!(rendered.lines().next(), Some("name    total_minutes"));
    }

    #[test]
    fn test_output_format_names() {
        let names: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["fixed", "table", "csv", "json"]);
        assert_eq!(OutputFormat::default(), OutputFormat::Fixed);
    }
}
