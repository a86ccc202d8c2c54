//! Machine-readable report output.
//!
//! Converts a [`Table`] to CSV or JSON so report results can be piped into
//! other tools:
//!
//! ```bash
//! devtrack --format csv projects > projects.csv
//! devtrack --format json editors | jq '.[0].percent'
//! ```
//!
//! CSV writes NULL as an empty field. JSON emits one object per row keyed by
//! column name, with NULL as `null`; cells stay strings exactly as rendered.

use super::table::Table;
use anyhow::Result;
use serde_json::{Map, Value};

pub fn to_csv(table: &Table) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn to_json(table: &Table) -> Result<String> {
    let records: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = table
                .columns
                .iter()
                .zip(row)
                .map(|(column, cell)| (column.clone(), cell.clone().map(Value::String).unwrap_or(Value::Null)))
                .collect();
            Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editors() -> Table {
        let mut table = Table::new(vec!["name".to_string(), "total_minutes".to_string(), "percent".to_string()]);
        table.push_row(vec![Some("VSCode".to_string()), Some("270".to_string()), Some("65.85".to_string())]);
        table.push_row(vec![Some("Vim, classic".to_string()), Some("140".to_string()), None]);
        table
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&editors()).unwrap();
        assert_eq!(csv, "name,total_minutes,percent\nVSCode,270,65.85\n\"Vim, classic\",140,\n");
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&editors()).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
        assert_eq!(parsed[0]["name"], "VSCode");
        assert_eq!(parsed[0]["percent"], "65.85");
        assert_eq!(parsed[1]["percent"], Value::Null);
    }

    #[test]
    fn test_empty_table_exports() {
        let table = Table::new(vec!["name".to_string()]);
        assert_eq!(to_csv(&table).unwrap(), "name\n");
        assert_eq!(to_json(&table).unwrap(), "[]");
    }
}
