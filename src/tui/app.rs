//! Application state for the dashboard
//!
//! The App struct holds the latest render-cycle snapshot plus the small
//! amount of UI state (focus, selection, status line) needed between draws.

use chrono::{DateTime, Local};

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::services::{DashboardSnapshot, ExpenseService};
use crate::storage::Storage;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Chart,
    Expenses,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Data from the most recent render cycle
    pub snapshot: Option<DashboardSnapshot>,

    /// When the snapshot was taken
    pub last_refresh: Option<DateTime<Local>>,

    /// Selected row in the expense list
    pub selected_expense_index: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance with no snapshot yet
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            snapshot: None,
            last_refresh: None,
            selected_expense_index: 0,
            status_message: None,
        }
    }

    /// Run a full render cycle and replace the snapshot
    ///
    /// On failure the previous snapshot is discarded too, so nothing stale is
    /// shown alongside the error.
    pub fn refresh(&mut self) -> ExpenseResult<()> {
        self.snapshot = None;

        let snapshot =
            ExpenseService::new(self.storage).snapshot(self.settings.fixed_income)?;

        let count = snapshot.expenses.len();
        self.selected_expense_index = self.selected_expense_index.min(count.saturating_sub(1));
        self.snapshot = Some(snapshot);
        self.last_refresh = Some(Local::now());
        self.set_status(format!("Loaded {} expenses", count));

        Ok(())
    }

    /// Number of expenses in the current snapshot
    pub fn expense_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.expenses.len())
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Toggle focus between the chart and the expense list
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Chart => FocusedPanel::Expenses,
            FocusedPanel::Expenses => FocusedPanel::Chart,
        };
    }

    /// Move the list selection up
    pub fn move_up(&mut self) {
        if self.focused_panel == FocusedPanel::Expenses && self.selected_expense_index > 0 {
            self.selected_expense_index -= 1;
        }
    }

    /// Move the list selection down
    pub fn move_down(&mut self) {
        let max = self.expense_count();
        if self.focused_panel == FocusedPanel::Expenses
            && self.selected_expense_index < max.saturating_sub(1)
        {
            self.selected_expense_index += 1;
        }
    }
}
