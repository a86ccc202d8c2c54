use crate::{
    db::{db::Db, reports::Report},
    libs::{config::OutputConfig, messages::Message, view::OutputFormat, view::View},
    msg_debug, msg_error, msg_print,
};
use anyhow::Result;

/// Runs one report and prints its result.
///
/// A failed query prints the driver's diagnostic and returns `Ok(false)`;
/// callers keep going. The heading is skipped for CSV and JSON so the output
/// stays machine-readable.
pub fn cmd(db: &Db, report: &Report, output: &OutputConfig) -> Result<bool> {
    msg_debug!(format!("Running report: {:?}", report));

    let table = match report.run(db) {
        Ok(table) => table,
        Err(e) => {
            msg_error!(Message::QueryFailed(e.to_string()));
            return Ok(false);
        }
    };

    if matches!(output.format, OutputFormat::Fixed | OutputFormat::Table) {
        msg_print!(report.title(), true);
    }
    View::table(&table, output.format, output.column_width)?;

    Ok(true)
}
