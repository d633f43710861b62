//! Diagnostic logging bootstrap.
//!
//! Library code logs through the `log` facade with `event=... module=...
//! status=...` messages. This module installs a `flexi_logger` backend that
//! writes size-rotated files, never the terminal, since the dashboard owns
//! the screen.
//!
//! # Invariants
//! - Initialization happens at most once per process.
//! - Re-initializing with the same level and directory is a no-op.
//! - Re-initializing with a different level or directory is rejected.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

const LOG_FILE_BASENAME: &str = "expense-dashboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Start file logging at `level` under `log_dir`
///
/// # Errors
/// - `Config` when `level` is not one of trace|debug|info|warn|error, or
///   logging is already running with different settings.
/// - `Io` when the directory cannot be created or the backend fails to start.
pub fn init_logging(level: &str, log_dir: &Path) -> ExpenseResult<()> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> ExpenseResult<LoggingState> {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create log directory {}: {}",
                log_dir.display(),
                e
            ))
        })?;

        let logger = Logger::try_with_str(level)
            .map_err(|e| ExpenseError::Config(format!("Invalid log level {}: {}", level, e)))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|e| ExpenseError::Io(format!("Failed to start logger: {}", e)))?;

        info!(
            "event=app_start module=logging status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level,
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(ExpenseError::Config(format!(
            "Logging already initialized at {}; refusing to switch to {}",
            state.log_dir.display(),
            log_dir.display()
        )));
    }
    if state.level != level {
        return Err(ExpenseError::Config(format!(
            "Logging already initialized with level {}; refusing to switch to {}",
            state.level, level
        )));
    }

    Ok(())
}

fn normalize_level(level: &str) -> ExpenseResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(ExpenseError::Config(format!(
            "Unsupported log level {}; expected trace|debug|info|warn|error",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert_eq!(normalize_level("trace").unwrap(), "trace");
        assert!(normalize_level("verbose").is_err());
    }

    // The only test that starts the global logger.
    #[test]
    fn test_init_is_idempotent_and_rejects_switching() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");

        init_logging("info", &log_dir).unwrap();
        init_logging("info", &log_dir).unwrap();
        assert!(log_dir.exists());

        assert!(init_logging("debug", &log_dir).is_err());
        assert!(init_logging("info", &temp_dir.path().join("other")).is_err());
    }
}
