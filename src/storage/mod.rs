//! Storage layer for the expense dashboard
//!
//! A single SQLite file holds the `expenses` table. Connections are opened per
//! operation and never pooled.

pub mod expenses;

pub use expenses::ExpenseRepository;

use crate::config::paths::ExpensePaths;

/// Storage coordinator that owns the repositories for one data directory
pub struct Storage {
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Does not touch the disk; call [`ExpenseRepository::ensure_schema`]
    /// before the first read or write.
    pub fn new(paths: ExpensePaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.database_file()),
        }
    }
}
