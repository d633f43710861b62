//! CLI command for data export
//!
//! Writes every record to a file in CSV, JSON or YAML.

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (expenses with metadata)
    Json,
    /// YAML format (expenses with metadata, human-readable)
    Yaml,
}

/// Handle `export`
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(storage).list()?;

    let file = File::create(output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_expenses_csv(&expenses, &mut writer)?,
        ExportFormat::Json => export_full_json(&expenses, &mut writer, pretty)?,
        ExportFormat::Yaml => export_full_yaml(&expenses, &mut writer)?,
    }
    writer.flush()?;

    println!(
        "Exported {} expenses to: {}",
        expenses.len(),
        output.display()
    );
    Ok(())
}
