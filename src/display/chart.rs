//! Text chart of the monthly series

use crate::models::Money;
use crate::reports::{peak, MonthlyTotal};

/// Create a simple bar of `width` cells scaled against `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One line per month: key, bar, amount
pub fn format_monthly_chart(series: &[MonthlyTotal], currency: &str, width: usize) -> String {
    if series.is_empty() {
        return "No expenses to chart.\n".to_string();
    }

    let max = peak(series).as_f64();
    let amounts: Vec<String> = series
        .iter()
        .map(|m| m.total.format_with_symbol(currency))
        .collect();
    let amount_width = amounts.iter().map(|a| a.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!("Monthly Expenses (last {} months)\n", series.len()));
    output.push_str(&"-".repeat(10 + width + amount_width));
    output.push('\n');

    for (month, amount) in series.iter().zip(&amounts) {
        output.push_str(&format!(
            "{:<8} {} {:>amount_width$}\n",
            month.month,
            format_bar(month.total.as_f64(), max, width),
            amount,
            amount_width = amount_width,
        ));
    }

    let total: Money = series.iter().map(|m| m.total).sum();
    output.push_str(&format!(
        "{:<8} {} {:>amount_width$}\n",
        "Total",
        " ".repeat(width),
        total.format_with_symbol(currency),
        amount_width = amount_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(100.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "   ");
        assert_eq!(format_bar(-5.0, 100.0, 3), "   ");
    }

    #[test]
    fn test_monthly_chart() {
        let series = vec![
            MonthlyTotal {
                month: "2024-05".into(),
                total: Money::from_cents(10000),
            },
            MonthlyTotal {
                month: "2024-06".into(),
                total: Money::from_cents(5000),
            },
        ];

        let output = format_monthly_chart(&series, "₹", 10);

        assert!(output.contains("2024-05  ██████████ ₹100.00"));
        assert!(output.contains("2024-06  █████░░░░░  ₹50.00"));
        assert!(output.contains("₹150.00"));
    }

    #[test]
    fn test_empty_chart() {
        assert_eq!(format_monthly_chart(&[], "₹", 10), "No expenses to chart.\n");
    }
}
