//! Export module for the expense tracker
//!
//! Writes every stored expense in one of three formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable export with schema version and metadata
//! - YAML: the same document as JSON, with a commented header

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
