//! CSV Export functionality
//!
//! Writes one row per expense with an `id,title,amount,date` header.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use std::io::Write;

/// Export expenses to CSV, in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        csv_writer
            .write_record(["id", "title", "amount", "date"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    for expense in expenses {
        csv_writer
            .serialize(expense)
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    #[test]
    fn test_export_expenses_csv() {
        let expenses = vec![
            Expense::new(ExpenseId::from_raw(2), "Groceries, weekly", 250.75, "2025-01-10"),
            Expense::new(ExpenseId::from_raw(1), "Rent", 12000.0, "2025-01-01"),
        ];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "id,title,amount,date");
        assert_eq!(lines[1], "2,\"Groceries, weekly\",250.75,2025-01-10");
        assert_eq!(lines[2], "1,Rent,12000.0,2025-01-01");
    }

    #[test]
    fn test_export_empty_writes_header() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "id,title,amount,date\n");
    }
}
