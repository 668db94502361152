//! Monthly series
//!
//! Groups expenses by calendar month for the trend chart. Only months that
//! have at least one expense appear; gaps are not filled.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Sum of expenses for one `YYYY-MM` month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// Year-month key, e.g. `2024-06`
    pub month: String,
    pub total: Money,
}

/// Totals for the last `months` months that have expenses, oldest first
///
/// Records with a malformed date are skipped. `months == 0` yields an
/// empty series.
pub fn monthly_series(records: &[Expense], months: usize) -> Vec<MonthlyTotal> {
    // `YYYY-MM` keys sort chronologically as strings
    let mut by_month: BTreeMap<String, Money> = BTreeMap::new();
    for expense in records {
        if let Some(key) = expense.month_key() {
            *by_month.entry(key).or_insert_with(Money::zero) += expense.amount;
        }
    }

    let skip = by_month.len().saturating_sub(months);
    by_month
        .into_iter()
        .skip(skip)
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// Chart coordinates: x is the position in the series, y the amount
pub fn chart_points(series: &[MonthlyTotal]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, m)| (i as f64, m.total.as_f64()))
        .collect()
}

/// X axis labels, one month key per point
pub fn chart_labels(series: &[MonthlyTotal]) -> Vec<String> {
    series.iter().map(|m| m.month.clone()).collect()
}

/// Largest monthly total, zero for an empty series
pub fn peak(series: &[MonthlyTotal]) -> Money {
    series
        .iter()
        .map(|m| m.total)
        .max()
        .unwrap_or_else(Money::zero)
}
