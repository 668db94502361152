//! Expense Tracker - record, sum and chart personal expenses
//!
//! This library provides the core functionality behind the `expenses`
//! binary: a SQLite-backed expense store, aggregates computed from it, and
//! the terminal UI and command line built on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, categories and money
//! - `storage`: SQLite store with versioned migrations
//! - `reports`: Totals, monthly series and summaries
//! - `services`: Input validation and reload-after-mutation
//! - `cli` / `tui`: User-facing surfaces
//! - `display` / `export`: Terminal formatting and CSV/JSON/YAML export
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::services::{CreateExpenseInput, ExpenseService};
//! use expense_tracker::models::ExpenseCategory;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::open_in_memory()?;
//! let service = ExpenseService::new(&storage);
//! let input = CreateExpenseInput::new("12.50", ExpenseCategory::Food, "Lunch");
//! let result = service.add(&input)?;
//! assert_eq!(result.expenses.len(), 1);
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
