//! Service layer for the expense dashboard
//!
//! The service layer sits on top of the storage layer and ties reads to the
//! reports.

pub mod expense;

pub use expense::{DashboardSnapshot, ExpenseService};
