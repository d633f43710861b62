//! Dashboard views
//!
//! Summary, chart, expense list and status bar.

pub mod chart;
pub mod expenses;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::App;
use super::layout::DashboardLayout;

/// Render the whole dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let layout = DashboardLayout::new(frame.area());

    summary::render(frame, app, layout.summary);
    chart::render(frame, app, layout.chart);
    expenses::render(frame, app, layout.expenses);
    status_bar::render(frame, app, layout.status_bar);
}
