//! CLI command for data export

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// JSON document with metadata
    Json,
    /// YAML document with metadata, human-readable
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format (defaults to the file extension, then CSV)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl ExportArgs {
    /// Format requested explicitly or implied by the output path
    pub fn resolved_format(&self) -> ExportFormat {
        self.format
            .or_else(|| ExportFormat::from_extension(&self.output))
            .unwrap_or(ExportFormat::Csv)
    }
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let format = args.resolved_format();
    let expenses = ExpenseService::new(storage).list_all()?;
    let count = expenses.len();

    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_expenses_csv(&expenses, &mut writer)?,
        ExportFormat::Json => export_full_json(expenses, &mut writer, !args.compact)?,
        ExportFormat::Yaml => export_full_yaml(expenses, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    log::info!("Exported {} expenses as {:?}", count, format);
    println!(
        "Exported {} expenses to: {}",
        count,
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money, NewExpense};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn args(output: PathBuf, format: Option<ExportFormat>) -> ExportArgs {
        ExportArgs {
            output,
            format,
            compact: false,
        }
    }

    #[test]
    fn test_resolved_format() {
        assert_eq!(
            args("out.yml".into(), None).resolved_format(),
            ExportFormat::Yaml
        );
        assert_eq!(
            args("out.JSON".into(), None).resolved_format(),
            ExportFormat::Json
        );
        assert_eq!(args("out".into(), None).resolved_format(), ExportFormat::Csv);
        assert_eq!(
            args("out.csv".into(), Some(ExportFormat::Json)).resolved_format(),
            ExportFormat::Json
        );
    }

    #[test]
    fn test_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::open_in_memory().unwrap();
        storage
            .expenses()
            .add(&NewExpense::new(
                Money::from_cents(300),
                ExpenseCategory::Food,
                "Bagel",
                NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            ))
            .unwrap();
        let output = temp_dir.path().join("expenses.json");

        handle_export_command(&storage, args(output.clone(), None)).unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert!(contents.contains("Bagel"));
        assert!(contents.contains("\"expense_count\": 1"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::open_in_memory().unwrap();
        let output = temp_dir.path().join("missing").join("out.csv");

        let err = handle_export_command(&storage, args(output, None)).unwrap_err();

        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
