//! Expense list view
//!
//! Shows every record, newest date first

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::currency::format_currency;
use crate::display::expense::truncate;
use crate::tui::app::{App, FocusedPanel};

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Expenses {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let expenses = match app.snapshot.as_ref() {
        Some(snapshot) if !snapshot.expenses.is_empty() => &snapshot.expenses,
        _ => {
            let text = Paragraph::new("No expenses recorded. Add one with `expense add`.")
                .block(block)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(text, area);
            return;
        }
    };

    let symbol = app.settings.currency_symbol.as_str();

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Title").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .height(1)
    .style(Style::default().fg(Color::Yellow));

    let widths = [
        Constraint::Length(10),
        Constraint::Min(8),
        Constraint::Length(14),
    ];

    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(truncate(&expense.date, 10)),
                Cell::from(truncate(&expense.title, 24)),
                Cell::from(format_currency(expense.amount, symbol))
                    .style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if app.focused_panel == FocusedPanel::Expenses {
        state.select(Some(app.selected_expense_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
