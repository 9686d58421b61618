//! JSON export

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{LedgerEntry, UserName};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported ledger document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub user: UserName,
    pub entries: Vec<LedgerEntry>,
    /// Sum of numeric amounts, in cents; null when out of range
    pub total_cents: Option<i64>,
    /// Entries whose amount is not a number
    pub unparsed_count: usize,
}

impl LedgerExport {
    /// Build the export for one user
    pub fn from_storage(storage: &Storage, user: &UserName) -> PocketbookResult<Self> {
        let summary = LedgerService::new(storage).summary(user)?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user: summary.user,
            entries: summary.entries,
            total_cents: summary.total.map(|t| t.cents()),
            unparsed_count: summary.unparsed,
        })
    }
}

/// Export a user's ledger as pretty-printed JSON
pub fn export_ledger_json<W: Write>(
    storage: &Storage,
    user: &UserName,
    writer: &mut W,
) -> PocketbookResult<()> {
    let export = LedgerExport::from_storage(storage, user)?;
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PocketbookError::Export(e.to_string()))?;
    Ok(())
}
