//! Parsing helpers for file names and output format.

use chrono::NaiveDate;

use crate::errors::CliError;

/// Explicit `--format` choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse the `--format` flag.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Append `.csv` unless the name already ends with it.
pub fn ensure_csv_extension(name: &str) -> String {
    let name = name.trim();
    if name.ends_with(".csv") {
        name.to_string()
    } else {
        format!("{}.csv", name)
    }
}

/// Default export file name for `today`.
pub fn default_export_name(today: NaiveDate) -> String {
    format!("transactions_{}.csv", today.format("%Y%m%d"))
}
