//! TUI Views module
//!
//! The single screen: summary cards, monthly chart, expense list and
//! status bar, with dialogs drawn on top.

pub mod chart;
pub mod expense_list;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.summary);
    chart::render(frame, app, layout.chart);
    expense_list::render(frame, app, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => dialogs::confirm::render(frame, app, id),
        ActiveDialog::None => {}
    }
}
