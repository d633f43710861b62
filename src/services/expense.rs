//! Expense service
//!
//! Adds expenses and assembles the dashboard snapshot. A snapshot is one full
//! render cycle: ensure the schema, fetch every record, then derive the
//! summary and the chart from that single fetch.

use log::info;

use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::reports::{ExpenseSummary, TimeSeriesChart};
use crate::storage::Storage;

/// Everything the dashboard shows for one render cycle
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// All records, newest date first
    pub expenses: Vec<Expense>,
    /// Income, total expenses and remaining
    pub summary: ExpenseSummary,
    /// Amounts over time, in the same order as `expenses`
    pub chart: TimeSeriesChart,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Insert one expense
    ///
    /// Returns `Ok` exactly when the row was committed, and the returned
    /// record is the one `list` will report.
    pub fn add(&self, title: &str, amount: f64, date: &str) -> ExpenseResult<Expense> {
        self.storage.expenses.ensure_schema()?;
        let id = self.storage.expenses.insert(title, amount, date)?;

        info!("event=expense_add module=service status=ok id={}", id);
        Ok(Expense::new(id, title, amount, date))
    }

    /// All expenses, newest date first
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.ensure_schema()?;
        self.storage.expenses.fetch_all()
    }

    /// Run one render cycle against a fixed income figure
    ///
    /// Any storage failure aborts the whole cycle; no partial snapshot is
    /// returned.
    pub fn snapshot(&self, income: f64) -> ExpenseResult<DashboardSnapshot> {
        let expenses = self.list()?;
        let summary = ExpenseSummary::compute(&expenses, income);
        let chart = TimeSeriesChart::build(&expenses);

        Ok(DashboardSnapshot {
            expenses,
            summary,
            chart,
        })
    }
}
