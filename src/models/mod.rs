//! Core data models for the expense dashboard
//!
//! The persisted expense record, its identifier, and the display-side
//! money type.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
