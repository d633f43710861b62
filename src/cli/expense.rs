//! CLI commands for expense records
//!
//! Each handler runs one stateless pass against storage and prints to stdout.

use chrono::Local;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::{format_currency, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_chart_json;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Today's date in the stored `YYYY-MM-DD` form
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Handle `add`
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    title: &str,
    amount: f64,
    date: Option<String>,
) -> ExpenseResult<()> {
    let date = date.unwrap_or_else(today);
    let expense = ExpenseService::new(storage).add(title, amount, &date)?;

    println!(
        "Added {}: {} {} on {}",
        expense.id,
        expense.title,
        format_currency(expense.amount, &settings.currency_symbol),
        expense.date
    );
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(storage).list()?;
    print!(
        "{}",
        format_expense_list(&expenses, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `summary`
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let snapshot = ExpenseService::new(storage).snapshot(settings.fixed_income)?;
    print!(
        "{}",
        snapshot.summary.format_terminal(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle `chart`: write the chart object as JSON to a file or stdout
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    output: Option<PathBuf>,
    pretty: bool,
) -> ExpenseResult<()> {
    let snapshot = ExpenseService::new(storage).snapshot(settings.fixed_income)?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_chart_json(&snapshot.chart, &mut writer, pretty)?;
            writer.flush()?;
            println!("Chart written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_chart_json(&snapshot.chart, &mut handle, pretty)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_format() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }
}
