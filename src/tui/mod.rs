//! Terminal User Interface module
//!
//! A single screen built with ratatui: summary cards, the monthly chart and
//! the expense list, with dialogs for adding, confirming deletes and help.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;
pub mod theme;

pub use app::App;
pub use terminal::run_tui;
