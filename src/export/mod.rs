//! Export module for the expense dashboard
//!
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: all expenses with metadata, or the dashboard chart
//! - YAML: all expenses with metadata, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_chart_json, export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
