//! Layout definitions for the dashboard
//!
//! Summary across the top, chart and expense list side by side, status bar
//! at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    /// Income / expenses / remaining
    pub summary: Rect,
    /// Expenses over time
    pub chart: Rect,
    /// Record list
    pub expenses: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Summary
                Constraint::Min(8),    // Chart + list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(vertical[1]);

        Self {
            summary: vertical[0],
            chart: horizontal[0],
            expenses: horizontal[1],
            status_bar: vertical[2],
        }
    }
}
