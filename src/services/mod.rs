//! Service layer for the expense tracker
//!
//! Input validation and mutation-then-reload on top of the storage layer.

pub mod expense;

pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService, Refreshed};
