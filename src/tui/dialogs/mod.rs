//! Dialog modules for the TUI
//!
//! Contains modal dialogs for adding and deleting expenses, and help

pub mod confirm;
pub mod expense;
pub mod help;
