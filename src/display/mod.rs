//! Display formatting for terminal output
//!
//! Currency formatting shared by the CLI and the dashboard, plus the plain
//! text expense list.

pub mod currency;
pub mod expense;

pub use currency::format_currency;
pub use expense::{format_expense_list, format_expense_row};
