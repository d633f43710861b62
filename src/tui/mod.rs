//! Terminal dashboard
//!
//! A single-screen ratatui dashboard: income summary, an "Expenses Over
//! Time" chart and the record list. Every refresh is a full render cycle
//! against storage.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
