//! Display formatting for terminal output
//!
//! Plain-text renderings of expenses and the monthly series, used by the
//! CLI subcommands.

pub mod chart;
pub mod expense;

pub use chart::{format_bar, format_monthly_chart};
pub use expense::{format_date, format_expense_details, format_expense_table, truncate};
