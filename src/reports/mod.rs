//! Reports module for the expense dashboard
//!
//! Derived views over the full record set: the income/expense summary and the
//! expenses-over-time chart.

pub mod summary;
pub mod time_series;

pub use summary::ExpenseSummary;
pub use time_series::TimeSeriesChart;
