//! Export module for Pocketbook
//!
//! Writes one user's ledger in one of three formats:
//! - CSV: spreadsheet-compatible rows of title and amount
//! - JSON: machine-readable, with schema version and totals
//! - YAML: the JSON document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_ledger_csv;
pub use self::json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_ledger_yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::UserName;
use crate::storage::Storage;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = PocketbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(PocketbookError::Export(format!(
                "Unknown format '{}'. Valid formats: csv, json, yaml",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Export a user's ledger in the given format
pub fn export_ledger<W: Write>(
    storage: &Storage,
    user: &UserName,
    format: ExportFormat,
    writer: &mut W,
) -> PocketbookResult<()> {
    match format {
        ExportFormat::Csv => export_ledger_csv(storage, user, writer),
        ExportFormat::Json => export_ledger_json(storage, user, writer),
        ExportFormat::Yaml => export_ledger_yaml(storage, user, writer),
    }
}
