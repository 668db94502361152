//! Monthly spending chart
//!
//! Line chart over the last few active months, x labelled by `YYYY-MM`.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::reports::{chart_labels, chart_points, peak};
use crate::tui::app::App;

/// Above this many months only the first and last labels are drawn
const MAX_X_LABELS: usize = 7;

/// Render the chart
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Expenses ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.series.is_empty() {
        let text = Paragraph::new("Nothing to chart yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let points = chart_points(&app.series);
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let y_max = peak(&app.series).as_f64().max(1.0) * 1.1;

    let dataset = Dataset::default()
        .name("Spent")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let x_labels = x_axis_labels(chart_labels(&app.series));
    let y_labels = vec![
        Span::raw(app.format_money(Money::zero())),
        Span::raw(app.format_money(Money::from_f64(y_max / 2.0))),
        Span::raw(app.format_money(Money::from_f64(y_max))),
    ];

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Month labels, thinned to the ends when there are too many to fit
fn x_axis_labels(labels: Vec<String>) -> Vec<Span<'static>> {
    let labels = if labels.len() > MAX_X_LABELS {
        let first = labels.first().cloned().unwrap_or_default();
        let last = labels.last().cloned().unwrap_or_default();
        vec![first, last]
    } else {
        labels
    };

    labels.into_iter().map(Span::raw).collect()
}
