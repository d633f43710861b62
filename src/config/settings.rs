//! User settings for the expense dashboard
//!
//! Holds the fixed income figure fed to the summary, the currency symbol
//! used for display, and logging/TUI preferences.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Income assumed when no settings file overrides it.
///
/// There is no income table yet; this figure stands in for one.
pub const DEFAULT_FIXED_INCOME: f64 = 1000.0;

/// User settings for the expense dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Income figure the summary subtracts expenses from
    #[serde(default = "default_fixed_income")]
    pub fixed_income: f64,

    /// Currency symbol prefixed to every formatted amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dashboard event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_fixed_income() -> f64 {
    DEFAULT_FIXED_INCOME
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            fixed_income: default_fixed_income(),
            currency_symbol: default_currency(),
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.fixed_income, 1000.0);
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.tick_rate_ms, 250);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.fixed_income = 52_000.0;
        settings.currency_symbol = "$".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.fixed_income, 52_000.0);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"fixed_income": 250.0}"#).unwrap();
        assert_eq!(settings.fixed_income, 250.0);
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
