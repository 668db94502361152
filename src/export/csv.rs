//! CSV Export functionality
//!
//! Exports expenses to CSV, newest first.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Write expenses to CSV with a header row
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Category", "Description", "Amount"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.clone(),
                expense.category.as_str().to_string(),
                expense.description.clone(),
                expense.amount.to_string(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId, Money};

    #[test]
    fn test_export_expenses_csv() {
        let expenses = vec![
            Expense {
                id: ExpenseId::from_raw(2),
                amount: Money::from_cents(1999),
                category: ExpenseCategory::Shopping,
                description: "Socks, wool".into(),
                date: "2024-06-02".into(),
            },
            Expense {
                id: ExpenseId::from_raw(1),
                amount: Money::from_cents(-500),
                category: ExpenseCategory::Other,
                description: "Refund".into(),
                date: "2024-06-01".into(),
            },
        ];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Date,Category,Description,Amount");
        assert_eq!(lines[1], "2,2024-06-02,SHOPPING,\"Socks, wool\",19.99");
        assert_eq!(lines[2], "1,2024-06-01,OTHER,Refund,-5.00");
    }

    #[test]
    fn test_export_empty_has_header() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "ID,Date,Category,Description,Amount\n"
        );
    }
}
