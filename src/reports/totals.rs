//! Totals
//!
//! Sums over a list of expenses.

use chrono::{Local, NaiveDate};
use std::collections::HashMap;

use crate::models::{month_key_of, Expense, ExpenseCategory, Money};

/// Sum of all amounts. Empty input gives zero.
pub fn total(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}

/// Sum of amounts dated in the same year and month as `today`
///
/// Records whose date does not parse are left out; see
/// [`malformed_dates`] for reporting them.
pub fn current_month_total(records: &[Expense], today: NaiveDate) -> Money {
    let month = month_key_of(today);

    records
        .iter()
        .filter(|e| e.month_key().as_deref() == Some(month.as_str()))
        .map(|e| e.amount)
        .sum()
}

/// Count records whose date cannot be read, logging each one once
pub fn malformed_dates(records: &[Expense]) -> usize {
    records
        .iter()
        .filter(|e| e.parsed_date().is_none())
        .inspect(|e| {
            log::warn!(
                "Expense {} has malformed date '{}'; left out of monthly figures",
                e.id,
                e.date
            )
        })
        .count()
}

/// [`current_month_total`] as of the local clock
pub fn current_month_total_now(records: &[Expense]) -> Money {
    current_month_total(records, Local::now().date_naive())
}

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Money,
    pub count: usize,
}

impl CategoryTotal {
    /// Share of `overall`, in percent
    pub fn percentage_of(&self, overall: Money) -> f64 {
        if overall.is_zero() {
            0.0
        } else {
            (self.total.cents() as f64 / overall.cents() as f64) * 100.0
        }
    }
}

/// Per-category sums, largest first
///
/// Categories without expenses are omitted. Ties keep the category's
/// declaration order.
pub fn category_totals(records: &[Expense]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<ExpenseCategory, (Money, usize)> = HashMap::new();
    for expense in records {
        let entry = sums.entry(expense.category).or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = ExpenseCategory::ALL
        .iter()
        .filter_map(|category| {
            sums.get(category).map(|(total, count)| CategoryTotal {
                category: *category,
                total: *total,
                count: *count,
            })
        })
        .collect();

    // Stable sort keeps declaration order for ties
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn expense(id: i64, cents: i64, category: ExpenseCategory, date: &str) -> Expense {
        Expense {
            id: ExpenseId::from_raw(id),
            amount: Money::from_cents(cents),
            category,
            description: format!("expense {}", id),
            date: date.into(),
        }
    }

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_current_month_total_now_counts_today() {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let records = vec![
            expense(1, 700, ExpenseCategory::Food, &today),
            expense(2, 300, ExpenseCategory::Food, "1999-01-01"),
        ];

        assert_eq!(current_month_total_now(&records), Money::from_cents(700));
    }

    #[test]
    fn test_malformed_dates() {
        let records = vec![
            expense(1, 100, ExpenseCategory::Food, "2024-06-01"),
            expense(2, 100, ExpenseCategory::Food, "soon"),
            expense(3, 100, ExpenseCategory::Food, "2024-6-1"),
        ];

        assert_eq!(malformed_dates(&records), 2);
        assert_eq!(malformed_dates(&[]), 0);
    }

    #[test]
    fn test_total_empty() {
        assert_eq!(total(&[]), Money::zero());
    }

    #[test]
    fn test_total_is_order_independent() {
        let mut records = vec![
            expense(1, 10000, ExpenseCategory::Food, "2024-05-01"),
            expense(2, 5050, ExpenseCategory::Bills, "2024-06-01"),
            expense(3, -1025, ExpenseCategory::Other, "2024-06-03"),
        ];
        let forward = total(&records);
        records.reverse();

        assert_eq!(forward, Money::from_cents(14025));
        assert_eq!(total(&records), forward);
    }

    #[test]
    fn test_current_month_total() {
        let records = vec![
            expense(1, 10000, ExpenseCategory::Food, "2024-05-01"),
            expense(2, 5000, ExpenseCategory::Food, "2024-06-01"),
        ];

        assert_eq!(current_month_total(&records, june_15()), Money::from_units(50, 0));
        assert_eq!(total(&records), Money::from_units(150, 0));
    }

    #[test]
    fn test_current_month_total_same_month_other_year() {
        let records = vec![expense(1, 10000, ExpenseCategory::Food, "2023-06-10")];

        assert_eq!(current_month_total(&records, june_15()), Money::zero());
    }

    #[test]
    fn test_current_month_total_skips_malformed_dates() {
        let records = vec![
            expense(1, 700, ExpenseCategory::Food, "2024-06-02"),
            expense(2, 900, ExpenseCategory::Food, "June 3rd"),
            expense(3, 900, ExpenseCategory::Food, ""),
            expense(4, 900, ExpenseCategory::Food, "2024-06"),
        ];

        assert_eq!(current_month_total(&records, june_15()), Money::from_cents(700));
    }

    #[test]
    fn test_category_totals_largest_first() {
        let records = vec![
            expense(1, 1000, ExpenseCategory::Food, "2024-06-01"),
            expense(2, 4000, ExpenseCategory::Bills, "2024-06-01"),
            expense(3, 500, ExpenseCategory::Food, "2024-06-02"),
            expense(4, 1500, ExpenseCategory::Transport, "2024-06-03"),
        ];

        let totals = category_totals(&records);

        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].category, ExpenseCategory::Bills);
        assert_eq!(totals[0].total, Money::from_cents(4000));
        // Food and Transport tie at 15.00; Food is declared first
        assert_eq!(totals[1].category, ExpenseCategory::Food);
        assert_eq!(totals[1].count, 2);
        assert_eq!(totals[2].category, ExpenseCategory::Transport);
    }

    #[test]
    fn test_percentage_of() {
        let row = CategoryTotal {
            category: ExpenseCategory::Food,
            total: Money::from_cents(2500),
            count: 1,
        };

        assert!((row.percentage_of(Money::from_cents(10000)) - 25.0).abs() < f64::EPSILON);
        assert_eq!(row.percentage_of(Money::zero()), 0.0);
    }
}
