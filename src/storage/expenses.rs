//! Expense repository backed by a SQLite file
//!
//! # Invariants
//! - Every operation opens its own connection and releases it before returning,
//!   on success and on error alike.
//! - Rows are only ever appended; nothing here updates or deletes.
//! - `fetch_all` orders by `date DESC`, equal dates by ascending id.

use log::{debug, error, info};
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};

const CREATE_EXPENSES_SQL: &str = "CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    amount REAL NOT NULL,
    date TEXT NOT NULL
);";

const SELECT_ALL_SQL: &str = "SELECT id, title, amount, date
FROM expenses
ORDER BY date DESC, id ASC;";

/// Repository for the `expenses` table
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository for the database file at `path`
    ///
    /// Nothing is opened until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the `expenses` table if it does not exist yet
    pub fn ensure_schema(&self) -> ExpenseResult<()> {
        self.with_connection("ensure_schema", |conn| conn.execute_batch(CREATE_EXPENSES_SQL))
    }

    /// Append one expense and return the identifier SQLite assigned to it
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseError::Storage`] if the database cannot be opened or a
    /// NOT NULL constraint fails. SQLite binds a NaN amount as NULL, so a NaN
    /// amount is rejected here.
    pub fn insert(&self, title: &str, amount: f64, date: &str) -> ExpenseResult<ExpenseId> {
        let id = self.with_connection("insert", |conn| {
            conn.execute(
                "INSERT INTO expenses (title, amount, date) VALUES (?1, ?2, ?3);",
                params![title, amount, date],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        debug!("event=expense_insert module=storage id={}", id);
        Ok(ExpenseId::from_raw(id))
    }

    /// Read every expense, newest date first
    pub fn fetch_all(&self) -> ExpenseResult<Vec<Expense>> {
        let expenses = self.with_connection("fetch_all", |conn| {
            let mut stmt = conn.prepare(SELECT_ALL_SQL)?;
            let rows = stmt.query_map([], parse_expense_row)?;
            rows.collect::<Result<Vec<_>, _>>()
        })?;

        debug!(
            "event=expense_fetch module=storage count={}",
            expenses.len()
        );
        Ok(expenses)
    }

    /// Open a connection, run `op`, and close the connection again
    ///
    /// The connection is dropped when this function returns, whichever way
    /// `op` exits.
    fn with_connection<T, F>(&self, operation: &'static str, op: F) -> ExpenseResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let started_at = Instant::now();

        let result = Connection::open(&self.path).and_then(|conn| op(&conn));

        match result {
            Ok(value) => {
                info!(
                    "event=db_{} module=storage status=ok duration_ms={}",
                    operation,
                    started_at.elapsed().as_millis()
                );
                Ok(value)
            }
            Err(err) => {
                error!(
                    "event=db_{} module=storage status=error duration_ms={} path={} error={}",
                    operation,
                    started_at.elapsed().as_millis(),
                    self.path.display(),
                    err
                );
                Err(ExpenseError::Storage(format!(
                    "{} failed on {}: {}",
                    operation,
                    self.path.display(),
                    err
                )))
            }
        }
    }
}

fn parse_expense_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: ExpenseId::from_raw(row.get(0)?),
        title: row.get(1)?,
        amount: row.get(2)?,
        date: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("database.db"));
        repo.ensure_schema().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let (_temp_dir, repo) = create_test_repo();
        repo.ensure_schema().unwrap();
        repo.ensure_schema().unwrap();
        assert!(repo.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_then_fetch_keeps_exact_values() {
        let (_temp_dir, repo) = create_test_repo();

        let id = repo.insert("Sample Expense", 1000.50, "2025-04-17").unwrap();
        let expenses = repo.fetch_all().unwrap();

        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, id);
        assert_eq!(expenses[0].title, "Sample Expense");
        assert_eq!(expenses[0].amount, 1000.50);
        assert_eq!(expenses[0].date, "2025-04-17");
    }

    #[test]
    fn test_ids_are_monotonic() {
        let (_temp_dir, repo) = create_test_repo();

        let first = repo.insert("Coffee", 3.5, "2025-01-01").unwrap();
        let second = repo.insert("Tea", 2.0, "2025-01-01").unwrap();
        let third = repo.insert("Cake", 6.25, "2024-12-31").unwrap();

        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_fetch_all_orders_by_date_descending() {
        let (_temp_dir, repo) = create_test_repo();

        repo.insert("Rent", 12000.0, "2025-01-01").unwrap();
        repo.insert("Groceries", 250.75, "2025-01-10").unwrap();
        repo.insert("Fuel", 40.0, "2024-12-20").unwrap();

        let titles: Vec<_> = repo
            .fetch_all()
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Groceries", "Rent", "Fuel"]);
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();

        repo.insert("First", 1.0, "2025-02-02").unwrap();
        repo.insert("Second", 2.0, "2025-02-02").unwrap();
        repo.insert("Later", 3.0, "2025-03-01").unwrap();
        repo.insert("Third", 4.0, "2025-02-02").unwrap();

        let titles: Vec<_> = repo
            .fetch_all()
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Later", "First", "Second", "Third"]);
    }

    #[test]
    fn test_negative_amount_and_odd_date_are_stored_as_given() {
        let (_temp_dir, repo) = create_test_repo();

        repo.insert("Refund", -20.0, "not a date").unwrap();

        let expenses = repo.fetch_all().unwrap();
        assert_eq!(expenses[0].amount, -20.0);
        assert_eq!(expenses[0].date, "not a date");
    }

    #[test]
    fn test_nan_amount_violates_not_null() {
        let (_temp_dir, repo) = create_test_repo();

        let err = repo.insert("Broken", f64::NAN, "2025-01-01").unwrap_err();
        assert!(err.is_storage());
        assert!(repo.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn test_unreachable_database_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("missing").join("database.db"));

        assert!(repo.ensure_schema().unwrap_err().is_storage());
        assert!(repo.fetch_all().unwrap_err().is_storage());
    }

    #[test]
    fn test_fetch_without_schema_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("database.db"));

        assert!(repo.fetch_all().unwrap_err().is_storage());
    }

    #[test]
    fn test_data_survives_new_repository_instance() {
        let (temp_dir, repo) = create_test_repo();
        repo.insert("Books", 99.99, "2025-05-05").unwrap();

        let reopened = ExpenseRepository::new(temp_dir.path().join("database.db"));
        let expenses = reopened.fetch_all().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].title, "Books");
    }
}
