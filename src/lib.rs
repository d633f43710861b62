//! Expense Dashboard - a personal expense tracker for the terminal
//!
//! Records expenses in a local SQLite file, summarises them against a fixed
//! income figure and shows an "Expenses Over Time" chart in a ratatui
//! dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `logging`: Rotating file log
//! - `models`: Expense records, ids and display money
//! - `storage`: SQLite record store
//! - `reports`: Summary totals and the time-series chart
//! - `display`: Currency and list formatting
//! - `services`: Add, list and the dashboard render cycle
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `tui`: Terminal dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_dashboard::config::{ExpensePaths, Settings};
//! use expense_dashboard::services::ExpenseService;
//! use expense_dashboard::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths);
//! let snapshot = ExpenseService::new(&storage).snapshot(settings.fixed_income)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
