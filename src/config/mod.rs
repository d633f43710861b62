//! Configuration module for the expense dashboard
//!
//! This module provides configuration management including:
//! - Path resolution for the database, settings and logs
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
