//! Delete confirmation dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::ExpenseId;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation for deleting `id`
pub fn render(frame: &mut Frame, app: &App, id: ExpenseId) {
    let area = centered_rect_fixed(54, 9, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Expense ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to delete this expense?",
            Style::default().fg(Color::White),
        )),
    ];

    if let Some(expense) = app.expenses.iter().find(|e| e.id == id) {
        lines.push(Line::from(format!("Description: {}", expense.description)));
        lines.push(Line::from(format!(
            "Amount: {}",
            app.format_money(expense.amount)
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Y]", Style::default().fg(Color::Red)),
        Span::raw(" Delete  "),
        Span::styled("[N]", Style::default().fg(Color::Green)),
        Span::raw(" Keep  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
