//! Expense model
//!
//! An expense is created once and never edited; it can only be deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// Storage format of the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier
    pub id: ExpenseId,

    /// Amount spent
    pub amount: Money,

    /// Category
    pub category: ExpenseCategory,

    /// What the money was spent on
    pub description: String,

    /// Date as stored (`YYYY-MM-DD`). Kept as text so that a malformed row
    /// can still be listed.
    pub date: String,
}

impl Expense {
    /// Parse the stored date, if it is a valid `YYYY-MM-DD`
    ///
    /// Only the zero-padded ten-character shape is accepted; `2024-6-1`
    /// would not sort or group with its month and counts as malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let shaped = self.date.len() == 10
            && self.date.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return None;
        }
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Year-month key (`YYYY-MM`) of a well-formed date
    pub fn month_key(&self) -> Option<String> {
        self.parsed_date().map(month_key_of)
    }
}

/// Year-month key (`YYYY-MM`) of a date
pub fn month_key_of(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// An expense that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: Money,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        amount: Money,
        category: ExpenseCategory,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date,
        }
    }

    /// Date formatted for the `date` column
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense_on(date: &str) -> Expense {
        Expense {
            id: ExpenseId::from_raw(1),
            amount: Money::from_cents(100),
            category: ExpenseCategory::Food,
            description: "Lunch".into(),
            date: date.into(),
        }
    }

    #[test]
    fn test_month_key() {
        assert_eq!(expense_on("2024-06-15").month_key().as_deref(), Some("2024-06"));
    }

    #[test]
    fn test_malformed_date_has_no_month() {
        assert_eq!(expense_on("yesterday").month_key(), None);
        assert_eq!(expense_on("2024-13-01").month_key(), None);
        assert_eq!(expense_on("").parsed_date(), None);
    }

    #[test]
    fn test_unpadded_date_is_malformed() {
        assert_eq!(expense_on("2024-6-1").parsed_date(), None);
        assert_eq!(expense_on("2024-06-1").parsed_date(), None);
        assert_eq!(expense_on("2024-6-01").month_key(), None);
        assert_eq!(expense_on(" 2024-06-01").parsed_date(), None);
        assert_eq!(expense_on("+2024-06-01").parsed_date(), None);
        assert_eq!(
            expense_on("2024-06-01").parsed_date(),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn test_new_expense_date_string() {
        let new = NewExpense::new(
            Money::from_cents(250),
            ExpenseCategory::Transport,
            "Bus",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        assert_eq!(new.date_string(), "2024-01-05");
    }
}
