//! Summary cards
//!
//! Total spent, spent this month, and how many expenses are recorded.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::summary_cards;

/// Render the summary cards row
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let cards = summary_cards(area, 3);
    let summary = &app.summary;

    render_card(
        frame,
        cards[0],
        "Total Expenses",
        app.format_money(summary.total),
        Color::Cyan,
    );
    render_card(
        frame,
        cards[1],
        &format!("This Month ({})", summary.month),
        app.format_money(summary.month_total),
        Color::Green,
    );

    let count = if summary.malformed_dates > 0 {
        format!("{} ({} undated)", summary.count, summary.malformed_dates)
    } else {
        summary.count.to_string()
    };
    render_card(frame, cards[2], "Expenses", count, Color::Magenta);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(color),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(paragraph, area);
}
