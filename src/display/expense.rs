//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::Expense;

/// Column at which descriptions are cut in the table
const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n\nAdd one with 'expenses add <amount> <description>'."
            .to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: format_date(e, &settings.date_format),
        category: format!("{} {}", e.category.icon(), e.category.label()),
        description: truncate(&e.description, DESCRIPTION_WIDTH),
        amount: e.amount.format_with_symbol(&settings.currency_symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(0), Alignment::right())
        .modify(Columns::single(4), Alignment::right());

    table.to_string()
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     #{}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(expense, &settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Category:    {} {}\n",
        expense.category.icon(),
        expense.category.label()
    ));
    output.push_str(&format!("Description: {}\n", expense.description));

    output
}

/// Render the expense date with the user's format; malformed dates are
/// shown as stored
pub fn format_date(expense: &Expense, date_format: &str) -> String {
    match expense.parsed_date() {
        Some(date) => date.format(date_format).to_string(),
        None => expense.date.clone(),
    }
}

/// Truncate a string to `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
