//! Expense list formatting for terminal output

use crate::models::Expense;

use super::currency::format_currency;

const TITLE_WIDTH: usize = 28;

/// Format a single expense as one list row
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{:>8} {:<12} {:<width$} {:>18}",
        expense.id.to_string(),
        truncate(&expense.date, 12),
        truncate(&expense.title, TITLE_WIDTH),
        format_currency(expense.amount, symbol),
        width = TITLE_WIDTH
    )
}

/// Format a list of expenses with a header, in the order given
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>8} {:<12} {:<width$} {:>18}\n",
        "ID",
        "Date",
        "Title",
        "Amount",
        width = TITLE_WIDTH
    ));
    output.push_str(&"-".repeat(8 + 12 + TITLE_WIDTH + 18 + 3));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
