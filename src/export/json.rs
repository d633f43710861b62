//! JSON Export functionality
//!
//! Exports every expense with schema versioning, and the dashboard chart.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::reports::TimeSeriesChart;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, in fetch order
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    /// Lexicographically smallest date text
    pub earliest_date: Option<String>,

    /// Lexicographically largest date text
    pub latest_date: Option<String>,
}

impl FullExport {
    /// Build an export from already-fetched expenses
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let earliest_date = expenses.iter().map(|e| &e.date).min().cloned();
        let latest_date = expenses.iter().map(|e| &e.date).max().cloned();

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            earliest_date,
            latest_date,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        }
    }
}

/// Export expenses to JSON
pub fn export_full_json<W: Write>(
    expenses: &[Expense],
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::from_expenses(expenses.to_vec());
    write_json(writer, &export, pretty)
}

/// Export the dashboard chart to JSON
pub fn export_chart_json<W: Write>(
    chart: &TimeSeriesChart,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    write_json(writer, chart, pretty)
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> ExpenseResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(ExpenseId::from_raw(2), "Groceries", 250.75, "2025-01-10"),
            Expense::new(ExpenseId::from_raw(1), "Rent", 12000.0, "2025-01-01"),
        ]
    }

    #[test]
    fn test_export_metadata() {
        let export = FullExport::from_expenses(sample());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.earliest_date.as_deref(), Some("2025-01-01"));
        assert_eq!(export.metadata.latest_date.as_deref(), Some("2025-01-10"));
    }

    #[test]
    fn test_export_full_json_round_trip() {
        let mut buffer = Vec::new();
        export_full_json(&sample(), &mut buffer, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.expenses, sample());
    }

    #[test]
    fn test_export_empty() {
        let mut buffer = Vec::new();
        export_full_json(&[], &mut buffer, false).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert!(parsed.expenses.is_empty());
        assert!(parsed.metadata.earliest_date.is_none());
    }

    #[test]
    fn test_export_chart_json() {
        let chart = TimeSeriesChart::build(&sample());
        let mut buffer = Vec::new();
        export_chart_json(&chart, &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["trace"]["x"][1], "2025-01-01");
        assert_eq!(value["layout"]["y_axis_title"], "Amount");
    }
}
