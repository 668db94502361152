//! JSON Export functionality
//!
//! Exports every expense to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, newest first
    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of all amounts
    pub total: Money,

    /// Earliest well-formed date
    pub earliest_expense: Option<String>,

    /// Latest well-formed date
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Build an export document from a snapshot
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let dates = || expenses.iter().filter_map(|e| e.parsed_date());
        let earliest_expense = dates().min().map(|d| d.to_string());
        let latest_expense = dates().max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense,
            latest_expense,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        }
    }

    /// Check the document is consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata lists {} expenses but the export contains {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        let mut seen = HashSet::new();
        for expense in &self.expenses {
            if !seen.insert(expense.id) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
        }

        Ok(())
    }
}

/// Export expenses to JSON
pub fn export_full_json<W: Write>(
    expenses: Vec<Expense>,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::from_expenses(expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
