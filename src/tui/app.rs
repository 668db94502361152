//! Application state for the TUI
//!
//! The App struct holds the current snapshot of expenses and everything
//! derived from it, plus selection and dialog state.

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId};
use crate::reports::{monthly_series, MonthlyTotal, Summary};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::dialogs::expense::ExpenseFormState;

/// How long an informational status message stays visible
const STATUS_TTL: Duration = Duration::from_secs(5);

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    ConfirmDelete(ExpenseId),
    Help,
}

/// Severity of a status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Snapshot of all expenses, newest first. Replaced after every change.
    pub expenses: Vec<Expense>,

    /// Totals for the summary cards
    pub summary: Summary,

    /// Monthly totals for the chart
    pub series: Vec<MonthlyTotal>,

    /// Selected row in the expense list
    pub selected_index: usize,

    /// Row whose actions are revealed
    pub revealed: Option<ExpenseId>,

    /// Status message to display
    pub status: Option<StatusMessage>,

    /// Add expense form state
    pub expense_form: ExpenseFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty snapshot
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let today = Local::now().date_naive();
        Self {
            storage,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::None,
            expenses: Vec::new(),
            summary: Summary::generate(&[], today),
            series: Vec::new(),
            selected_index: 0,
            revealed: None,
            status: None,
            expense_form: ExpenseFormState::new(),
        }
    }

    /// Reload every expense from storage
    ///
    /// On failure the previous snapshot is kept.
    pub fn reload(&mut self) -> ExpenseResult<()> {
        let expenses = ExpenseService::new(self.storage).list_all()?;
        self.apply_snapshot(expenses);
        Ok(())
    }

    /// Replace the snapshot and recompute everything derived from it
    pub fn apply_snapshot(&mut self, expenses: Vec<Expense>) {
        self.apply_snapshot_on(expenses, Local::now().date_naive());
    }

    /// [`App::apply_snapshot`] with an explicit date for the month total
    pub fn apply_snapshot_on(&mut self, expenses: Vec<Expense>, today: NaiveDate) {
        self.summary = Summary::generate(&expenses, today);
        self.series = monthly_series(&expenses, self.settings.chart_months);
        self.expenses = expenses;

        if let Some(id) = self.revealed {
            if !self.expenses.iter().any(|e| e.id == id) {
                self.revealed = None;
            }
        }
        self.selected_index = self
            .selected_index
            .min(self.expenses.len().saturating_sub(1));
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set an informational status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            kind: StatusKind::Info,
            shown_at: Instant::now(),
        });
    }

    /// Set an error status message. Errors stay until replaced.
    pub fn set_error(&mut self, message: impl Into<String>) {
        let text = message.into();
        log::error!("{}", text);
        self.status = Some(StatusMessage {
            text,
            kind: StatusKind::Error,
            shown_at: Instant::now(),
        });
    }

    /// Periodic housekeeping: expire old informational messages
    pub fn tick(&mut self) {
        let expired = matches!(
            &self.status,
            Some(s) if s.kind == StatusKind::Info && s.shown_at.elapsed() >= STATUS_TTL
        );
        if expired {
            self.status = None;
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddExpense {
            self.expense_form = ExpenseFormState::new();
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Currently selected expense
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.selected_index)
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.expenses.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.expenses.len().saturating_sub(1);
    }

    /// Toggle the action reveal on the selected row; only one row is
    /// revealed at a time
    pub fn toggle_reveal(&mut self) {
        let Some(id) = self.selected_expense().map(|e| e.id) else {
            return;
        };
        self.revealed = if self.revealed == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Ask for confirmation before deleting the selected expense
    pub fn request_delete(&mut self) {
        match self.selected_expense().map(|e| e.id) {
            Some(id) => self.open_dialog(ActiveDialog::ConfirmDelete(id)),
            None => self.set_status("Nothing to delete"),
        }
    }

    /// Delete an expense and adopt the reloaded list
    pub fn delete_expense(&mut self, id: ExpenseId) {
        match ExpenseService::new(self.storage).delete(id) {
            Ok(result) => {
                self.apply_snapshot(result.expenses);
                if result.outcome {
                    self.set_status(format!("Expense #{} deleted", id));
                } else {
                    self.set_status(format!("Expense #{} was already gone", id));
                }
            }
            Err(e) => self.set_error(format!("Failed to delete: {}", e)),
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }
}
