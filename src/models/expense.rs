//! Expense model
//!
//! One row of the `expenses` table. The date is kept as the text that was
//! stored; it is never parsed or validated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// A persisted expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned by the store
    pub id: ExpenseId,

    /// What the money was spent on
    pub title: String,

    /// Amount in currency units
    pub amount: f64,

    /// Calendar date text, ISO-like (e.g. "2025-01-10")
    pub date: String,
}

impl Expense {
    /// Create an expense from its stored columns
    pub fn new(
        id: ExpenseId,
        title: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            amount,
            date: date.into(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({:.2})", self.date, self.title, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(ExpenseId::from_raw(1), "Groceries", 250.75, "2025-01-10");
        assert_eq!(expense.title, "Groceries");
        assert_eq!(expense.amount, 250.75);
        assert_eq!(expense.date, "2025-01-10");
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(ExpenseId::from_raw(1), "Rent", 12000.0, "2025-01-01");
        assert_eq!(expense.to_string(), "2025-01-01 Rent (12000.00)");
    }

    #[test]
    fn test_date_is_not_validated() {
        let expense = Expense::new(ExpenseId::from_raw(3), "Odd", 1.0, "sometime in May");
        assert_eq!(expense.date, "sometime in May");
    }
}
