//! YAML Export functionality
//!
//! The JSON export document rendered as YAML with a short header.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::models::Expense;

/// Export expenses to YAML
pub fn export_full_yaml<W: Write>(expenses: Vec<Expense>, writer: &mut W) -> ExpenseResult<()> {
    let export = FullExport::from_expenses(expenses);
    let export_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
