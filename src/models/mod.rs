//! Core data models for the expense tracker
//!
//! Expenses, their categories, ids and the money type used for amounts.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{ExpenseCategory, UnknownCategory};
pub use expense::{month_key_of, Expense, NewExpense, DATE_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
