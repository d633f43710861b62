//! Strongly-typed ID wrapper for expense rows
//!
//! SQLite assigns the value (`INTEGER PRIMARY KEY AUTOINCREMENT`); the newtype
//! keeps it from being mixed up with counts or offsets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a rowid returned by SQLite
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying rowid
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
