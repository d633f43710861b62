//! Expense Summary
//!
//! Income, total spending and what is left over, computed from the full set
//! of records.
//!
//! Income is not tracked anywhere yet. The caller passes a fixed figure from
//! [`Settings::fixed_income`](crate::config::Settings::fixed_income) and every
//! record reduces `remaining`, whatever its date.

use serde::Serialize;

use crate::display::currency::format_currency;
use crate::models::Expense;

/// Totals shown at the top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseSummary {
    /// Income figure supplied by the caller
    pub income: f64,
    /// Sum of every record's amount
    pub total_expenses: f64,
    /// `income - total_expenses`
    pub remaining: f64,
    /// Number of records summed
    pub record_count: usize,
}

impl ExpenseSummary {
    /// Compute totals for `records` against a fixed `income`
    pub fn compute(records: &[Expense], income: f64) -> Self {
        let total_expenses: f64 = records.iter().map(|e| e.amount).sum();

        Self {
            income,
            total_expenses,
            remaining: income - total_expenses,
            record_count: records.len(),
        }
    }

    /// The `(income, total_expenses, remaining)` triple
    pub fn totals(&self) -> (f64, f64, f64) {
        (self.income, self.total_expenses, self.remaining)
    }

    /// Labelled, formatted lines in display order
    pub fn lines(&self, symbol: &str) -> [(&'static str, String); 3] {
        [
            ("Total Income", format_currency(self.income, symbol)),
            ("Total Expenses", format_currency(self.total_expenses, symbol)),
            ("Remaining Income", format_currency(self.remaining, symbol)),
        ]
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        for (label, value) in self.lines(symbol) {
            output.push_str(&format!("{:<18} {}\n", format!("{}:", label), value));
        }
        output.push_str(&format!("{:<18} {}\n", "Records:", self.record_count));

        output
    }
}
