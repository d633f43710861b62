//! Status bar view
//!
//! Shows record count, last refresh time, status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} records", app.expense_count()),
        Style::default().fg(Color::White),
    )];

    if let Some(at) = app.last_refresh {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("refreshed {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        "r:Refresh  Tab:Focus  j/k:Move  q:Quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
