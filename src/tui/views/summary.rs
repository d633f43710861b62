//! Summary panel
//!
//! Total income, total expenses and remaining income, one per line.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expense Tracker Dashboard ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match app.snapshot.as_ref() {
        Some(snapshot) => {
            let summary = &snapshot.summary;
            let symbol = app.settings.currency_symbol.as_str();

            summary
                .lines(symbol)
                .into_iter()
                .enumerate()
                .map(|(i, (label, value))| {
                    let value_style = if i == 2 && summary.remaining < 0.0 {
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Green)
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("{:<18}", format!("{}:", label)),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(value, value_style),
                    ])
                })
                .collect()
        }
        None => vec![Line::from("Loading...")],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
