//! Expenses-over-time chart view
//!
//! Draws the lines-plus-markers trace as two datasets over the same points:
//! a braille line and a dot scatter. Point i sits at x = i and is labelled
//! with its date.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::reports::TimeSeriesChart;
use crate::tui::app::{App, FocusedPanel};

/// Render the chart panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Chart {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let Some(snapshot) = app.snapshot.as_ref() else {
        let block = Block::default()
            .title(" Expenses Over Time ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        frame.render_widget(Paragraph::new("Loading...").block(block), area);
        return;
    };
    let chart = &snapshot.chart;

    let block = Block::default()
        .title(format!(" {} ", chart.layout.title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));

    let points = chart.indexed_points();
    let datasets = vec![
        Dataset::default()
            .name(chart.trace.name.as_str())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&points),
    ];

    let [y_min, y_max] = y_bounds(chart);
    let x_axis = Axis::default()
        .title(chart.layout.x_axis_title.as_str())
        .style(Style::default().fg(Color::Gray))
        .bounds(x_bounds(chart))
        .labels(
            x_labels(chart)
                .into_iter()
                .map(Span::from)
                .collect::<Vec<_>>(),
        );
    let y_axis = Axis::default()
        .title(chart.layout.y_axis_title.as_str())
        .style(Style::default().fg(Color::Gray))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::from(format!("{:.0}", y_min)),
            Span::from(format!("{:.0}", (y_min + y_max) / 2.0)),
            Span::from(format!("{:.0}", y_max)),
        ]);

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(widget, area);
}

/// X range covering every point index
pub fn x_bounds(chart: &TimeSeriesChart) -> [f64; 2] {
    [0.0, chart.len().saturating_sub(1).max(1) as f64]
}

/// Y range covering every finite amount, with a little headroom
pub fn y_bounds(chart: &TimeSeriesChart) -> [f64; 2] {
    let finite = chart.trace.y.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if min > max {
        return [0.0, 1.0];
    }

    let lo = min.min(0.0);
    let hi = max.max(0.0);
    let pad = ((hi - lo) * 0.05).max(1.0);
    [if lo < 0.0 { lo - pad } else { lo }, hi + pad]
}

/// Date labels for the first, middle and last points
pub fn x_labels(chart: &TimeSeriesChart) -> Vec<String> {
    let dates = &chart.trace.x;
    let mut indices = vec![0, dates.len() / 2, dates.len().saturating_sub(1)];
    indices.dedup();

    indices
        .into_iter()
        .filter_map(|i| dates.get(i).cloned())
        .collect()
}
