//! Path management for the expense dashboard
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_DASHBOARD_DIR` environment variable (if set)
//! 2. The current working directory, so the database lives at `./database.db`

use std::path::PathBuf;

use crate::error::ExpenseError;

/// File name of the SQLite database inside the base directory
pub const DATABASE_FILE_NAME: &str = "database.db";

/// Manages all paths used by the expense dashboard
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all dashboard data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var("EXPENSE_DASHBOARD_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine working directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join(DATABASE_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory for rolling diagnostic logs
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if the dashboard has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
