//! Expense CLI commands
//!
//! Add, list and delete expenses, and print the summary and monthly chart.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table, format_monthly_chart};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseCategory, ExpenseId};
use crate::reports::{malformed_dates, monthly_series, Summary};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Width of the bars printed by `chart`
const CHART_BAR_WIDTH: usize = 30;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense dated today
    Add {
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category (entertainment, shopping, food, transport, bills, other)
        #[arg(short, long, default_value = "other")]
        category: String,
    },
    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one expense
    Show {
        /// Expense ID (e.g., "12" or "#12")
        id: String,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (e.g., "12" or "#12")
        id: String,
    },
    /// Show totals and the per-category breakdown
    Summary,
    /// Show monthly totals as a bar chart
    Chart {
        /// Number of months to show (defaults to the configured value)
        #[arg(short, long)]
        months: Option<usize>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
        } => {
            let category = parse_category(&category)?;
            let input = CreateExpenseInput::new(amount, category, description);

            let result = service.add(&input)?;
            println!("Added expense #{}", result.outcome.id);
            print!("{}", format_expense_details(&result.outcome, settings));
        }

        ExpenseCommands::List { limit, category } => {
            let mut filter = ExpenseFilter::new();
            if let Some(category) = category {
                filter = filter.category(parse_category(&category)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(&filter)?;
            println!("{}", format_expense_table(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(parse_id(&id)?)?;
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_id(&id)?;
            let existing = service.get(id)?;

            let result = service.delete(id)?;
            match existing {
                Some(expense) if result.outcome => println!(
                    "Deleted expense #{} ({} {})",
                    expense.id,
                    expense.date,
                    expense.description
                ),
                _ => println!("No expense with id #{}; nothing deleted", id),
            }
        }

        ExpenseCommands::Summary => {
            let expenses = service.list_all()?;
            let summary = Summary::generate(&expenses, chrono::Local::now().date_naive());
            print!("{}", summary.format_terminal(currency));
        }

        ExpenseCommands::Chart { months } => {
            let months = months.unwrap_or(settings.chart_months);
            let expenses = service.list_all()?;
            malformed_dates(&expenses);
            let series = monthly_series(&expenses, months);
            print!("{}", format_monthly_chart(&series, currency, CHART_BAR_WIDTH));
        }
    }

    Ok(())
}

fn parse_category(s: &str) -> ExpenseResult<ExpenseCategory> {
    s.parse()
        .map_err(|e: crate::models::UnknownCategory| ExpenseError::Validation(e.to_string()))
}

fn parse_id(s: &str) -> ExpenseResult<ExpenseId> {
    s.parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid expense id: '{}'", s)))
}
