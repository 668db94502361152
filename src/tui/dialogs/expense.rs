//! Add expense dialog
//!
//! Modal form with amount, category and description fields. Input is
//! validated by the service; a rejected form stays open with the error
//! shown inline.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::ExpenseCategory;
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::category_color;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Amount,
    Category,
    Description,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
            Self::Description => Self::Category,
        }
    }
}

/// State for the add expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub amount_input: TextInput,
    pub category: ExpenseCategory,
    pub description_input: TextInput,
    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create an empty form; category starts at Other
    pub fn new() -> Self {
        Self {
            focused_field: ExpenseField::Amount,
            amount_input: TextInput::new().placeholder("e.g. 12.50"),
            category: ExpenseCategory::default(),
            description_input: TextInput::new().placeholder("What was it for?"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The focused text input, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Description => Some(&mut self.description_input),
            ExpenseField::Category => None,
        }
    }

    /// Form contents as service input
    pub fn to_input(&self) -> CreateExpenseInput {
        CreateExpenseInput::new(
            self.amount_input.value(),
            self.category,
            self.description_input.value(),
        )
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 11, frame.area());
    let form = &app.expense_form;

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(
            form.amount_input
                .line("Amount", form.focused_field == ExpenseField::Amount),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(category_line(
            form.category,
            form.focused_field == ExpenseField::Category,
        )),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            form.description_input
                .line("Description", form.focused_field == ExpenseField::Description),
        ),
        chunks[3],
    );

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            format!("⚠ {}", error),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Category selector line: `Category: ◀ 🍽 Food ▶`
fn category_line(category: ExpenseCategory, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let arrow_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(format!("{:>12}: ", "Category"), label_style),
        Span::styled("◀ ", arrow_style),
        Span::styled(
            format!("{} {}", category.icon(), category.label()),
            Style::default()
                .fg(category_color(category))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", arrow_style),
    ])
}

/// Handle key input for the add expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),

        KeyCode::Enter => save_expense(app),

        KeyCode::Left if form.focused_field == ExpenseField::Category => {
            form.category = form.category.prev();
        }
        KeyCode::Right | KeyCode::Char(' ') if form.focused_field == ExpenseField::Category => {
            form.category = form.category.next();
        }

        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Validate and store the form; on success close the dialog and adopt the
/// reloaded list
fn save_expense(app: &mut App) {
    let input = app.expense_form.to_input();

    let added = match ExpenseService::new(app.storage).record(&input) {
        Ok(added) => added,
        Err(e) if e.is_validation() => {
            app.expense_form.set_error(validation_message(&e));
            return;
        }
        Err(e) => {
            app.expense_form.set_error("Could not save the expense");
            app.set_error(format!("Failed to add expense: {}", e));
            return;
        }
    };

    // The row is stored from here on; keeping the form open would invite a duplicate
    app.close_dialog();
    match app.reload() {
        Ok(()) => {
            app.select_first();
            app.set_status(format!(
                "Added {} {} ({})",
                added.category.icon(),
                added.description,
                app.format_money(added.amount)
            ));
        }
        Err(e) => app.set_error(format!(
            "Expense #{} was saved but the list could not be reloaded: {}",
            added.id, e
        )),
    }
}

/// Strip the error kind prefix for inline display
fn validation_message(err: &crate::error::ExpenseError) -> String {
    match err {
        crate::error::ExpenseError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::storage::Storage;
    use crate::tui::app::{ActiveDialog, StatusKind};

    #[test]
    fn test_field_cycle() {
        let mut form = ExpenseFormState::new();
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Category);
        assert!(form.focused_input().is_none());
        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Amount);
        form.prev_field();
        assert_eq!(form.focused_field, ExpenseField::Description);
    }

    #[test]
    fn test_new_form_defaults_to_other() {
        let form = ExpenseFormState::new();
        assert_eq!(form.category, ExpenseCategory::Other);
        assert!(form.error_message.is_none());
    }

    #[test]
    fn test_to_input() {
        let mut form = ExpenseFormState::new();
        form.amount_input = TextInput::new().content("4.20");
        form.description_input = TextInput::new().content("Tea");
        form.category = ExpenseCategory::Food;

        let input = form.to_input();

        assert_eq!(input.amount, "4.20");
        assert_eq!(input.description, "Tea");
        assert_eq!(input.category, ExpenseCategory::Food);
    }

    fn filled_form(amount: &str, description: &str) -> ExpenseFormState {
        let mut form = ExpenseFormState::new();
        form.amount_input = TextInput::new().content(amount);
        form.description_input = TextInput::new().content(description);
        form
    }

    #[test]
    fn test_save_failure_keeps_form_open() {
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::AddExpense);
        app.expense_form = filled_form("3", "Tea");
        storage.execute_raw("DROP TABLE expenses").unwrap();

        save_expense(&mut app);

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert_eq!(
            app.expense_form.error_message.as_deref(),
            Some("Could not save the expense")
        );
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn test_reload_failure_after_save_closes_form() {
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::AddExpense);
        app.expense_form = filled_form("3", "Tea");
        storage
            .execute_raw(
                "CREATE TEMP TRIGGER garble_amount AFTER INSERT ON expenses
                 BEGIN
                     UPDATE expenses SET amount = 'not a number' WHERE id = NEW.id;
                 END;",
            )
            .unwrap();

        save_expense(&mut app);

        assert_eq!(app.active_dialog, ActiveDialog::None);
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("was saved"));
        assert_eq!(storage.expenses().count().unwrap(), 1);
    }
}
