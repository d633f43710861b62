//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable form.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::models::Expense;
use std::io::Write;

/// Export expenses to YAML format
pub fn export_full_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let export = FullExport::from_expenses(expenses.to_vec());

    writeln!(writer, "# Expense Dashboard Export")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
