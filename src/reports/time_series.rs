//! Expenses-over-time chart
//!
//! Builds a renderer-independent description of the dashboard chart: one
//! lines-plus-markers trace with record dates on x and amounts on y. The
//! terminal dashboard draws it with ratatui, and `expense chart` prints it as
//! JSON.
//!
//! Points are kept exactly in the order given. Nothing is sorted or merged,
//! so duplicate or out-of-order dates are plotted as they come.

use serde::Serialize;

use crate::models::Expense;

/// Chart title
pub const CHART_TITLE: &str = "Expenses Over Time";
/// Trace legend name
pub const TRACE_NAME: &str = "Expense Amount";

/// How a trace is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceMode {
    #[serde(rename = "lines+markers")]
    LinesAndMarkers,
}

/// Tick placement on the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    /// One tick per category, evenly spaced
    Linear,
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
}

/// One series of points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub mode: TraceMode,
    /// Record dates, in input order
    pub x: Vec<String>,
    /// Record amounts, parallel to `x`
    pub y: Vec<f64>,
}

/// Titles, axes and theme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub x_tick_mode: TickMode,
    pub theme: Theme,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_axis_title: "Date".to_string(),
            y_axis_title: "Amount".to_string(),
            x_tick_mode: TickMode::Linear,
            theme: Theme::Dark,
        }
    }
}

/// The dashboard chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesChart {
    pub trace: Trace,
    pub layout: ChartLayout,
}

impl TimeSeriesChart {
    /// Build the chart from records in fetch order
    pub fn build(records: &[Expense]) -> Self {
        let (x, y) = records
            .iter()
            .map(|e| (e.date.clone(), e.amount))
            .unzip();

        Self {
            trace: Trace {
                name: TRACE_NAME.to_string(),
                mode: TraceMode::LinesAndMarkers,
                x,
                y,
            },
            layout: ChartLayout::default(),
        }
    }

    /// Number of plotted points
    pub fn len(&self) -> usize {
        self.trace.y.len()
    }

    /// Whether the chart has no points
    pub fn is_empty(&self) -> bool {
        self.trace.y.is_empty()
    }

    /// Points as `(position, amount)`, with the x category mapped to its index
    pub fn indexed_points(&self) -> Vec<(f64, f64)> {
        self.trace
            .y
            .iter()
            .enumerate()
            .map(|(i, amount)| (i as f64, *amount))
            .collect()
    }
}
