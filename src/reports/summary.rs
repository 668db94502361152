//! Summary report
//!
//! The figures shown on the summary cards, computed from one snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use super::totals::{category_totals, current_month_total, malformed_dates, total, CategoryTotal};
use crate::models::{month_key_of, Expense, Money};

/// Aggregates for a snapshot of expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Month the `month_total` refers to (`YYYY-MM`)
    pub month: String,
    /// Sum of every expense
    pub total: Money,
    /// Sum of expenses in `month`
    pub month_total: Money,
    /// Number of expenses
    pub count: usize,
    /// Expenses whose date could not be read; excluded from `month_total`
    pub malformed_dates: usize,
    #[serde(skip)]
    pub by_category: Vec<CategoryTotal>,
}

impl Summary {
    /// Compute the summary as of `today`
    pub fn generate(records: &[Expense], today: NaiveDate) -> Self {
        Self {
            month: month_key_of(today),
            total: total(records),
            month_total: current_month_total(records, today),
            count: records.len(),
            malformed_dates: malformed_dates(records),
            by_category: category_totals(records),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Expense Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Total:",
            self.total.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            format!("This Month ({}):", self.month),
            self.month_total.format_with_symbol(currency)
        ));
        output.push_str(&format!("{:<20} {:>15}\n", "Expenses:", self.count));

        if self.malformed_dates > 0 {
            output.push_str(&format!(
                "{:<20} {:>15}\n",
                "Unreadable dates:", self.malformed_dates
            ));
        }

        if !self.by_category.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>15} {:>6} {:>7}\n",
                "Category", "Amount", "Count", "%"
            ));
            output.push_str(&"-".repeat(50));
            output.push('\n');

            for row in &self.by_category {
                output.push_str(&format!(
                    "{:<20} {:>15} {:>6} {:>6.1}%\n",
                    format!("{} {}", row.category.icon(), row.category.label()),
                    row.total.format_with_symbol(currency),
                    row.count,
                    row.percentage_of(self.total)
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId};

    fn expense(id: i64, cents: i64, category: ExpenseCategory, date: &str) -> Expense {
        Expense {
            id: ExpenseId::from_raw(id),
            amount: Money::from_cents(cents),
            category,
            description: "test".into(),
            date: date.into(),
        }
    }

    #[test]
    fn test_generate() {
        let records = vec![
            expense(1, 10000, ExpenseCategory::Food, "2024-05-01"),
            expense(2, 5000, ExpenseCategory::Bills, "2024-06-01"),
            expense(3, 300, ExpenseCategory::Other, "someday"),
        ];

        let summary = Summary::generate(&records, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());

        assert_eq!(summary.month, "2024-06");
        assert_eq!(summary.total, Money::from_cents(15300));
        assert_eq!(summary.month_total, Money::from_cents(5000));
        assert_eq!(summary.count, 3);
        assert_eq!(summary.malformed_dates, 1);
        assert_eq!(summary.by_category.len(), 3);
    }

    #[test]
    fn test_format_terminal() {
        let records = vec![expense(1, 1250, ExpenseCategory::Food, "2024-06-01")];
        let summary = Summary::generate(&records, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());

        let output = summary.format_terminal("₹");

        assert!(output.contains("Expense Summary"));
        assert!(output.contains("₹12.50"));
        assert!(output.contains("This Month (2024-06):"));
        assert!(output.contains("Food"));
        assert!(!output.contains("Unreadable dates"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::generate(&[], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert_eq!(summary.total, Money::zero());
        assert_eq!(summary.month_total, Money::zero());
        assert!(summary.by_category.is_empty());
    }
}
