//! Expense list view
//!
//! Newest first. The revealed row highlights its amount and shows the
//! delete hint.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_date, truncate};
use crate::models::Expense;
use crate::tui::app::App;
use crate::tui::theme::category_color;

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.expenses.len()))
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.expenses.is_empty() {
        let text = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(18), // Category
        Constraint::Min(16),    // Description
        Constraint::Length(12), // Date
        Constraint::Length(14), // Amount
        Constraint::Length(10), // Actions
    ];

    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(""),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = app.expenses.iter().map(|e| expense_row(app, e)).collect();

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
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn expense_row(app: &App, expense: &Expense) -> Row<'static> {
    let color = category_color(expense.category);
    let revealed = app.revealed == Some(expense.id);

    let category = Line::from(vec![
        Span::raw(format!("{} ", expense.category.icon())),
        Span::styled(expense.category.label(), Style::default().fg(color)),
    ]);

    let amount_style = if revealed {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    };

    let actions = if revealed {
        Cell::from(Span::styled("d:Delete", Style::default().fg(Color::Red)))
    } else {
        Cell::from("")
    };

    Row::new(vec![
        Cell::from(category),
        Cell::from(truncate(&expense.description, 40)),
        Cell::from(format_date(expense, &app.settings.date_format)),
        Cell::from(app.format_money(expense.amount)).style(amount_style),
        actions,
    ])
}
