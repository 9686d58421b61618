//! CSV export

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::UserName;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Export a user's entries as `Title,Amount` rows in insertion order
pub fn export_ledger_csv<W: Write>(
    storage: &Storage,
    user: &UserName,
    writer: &mut W,
) -> PocketbookResult<()> {
    let entries = LedgerService::new(storage).list(user)?;
    let to_export = |e: ::csv::Error| PocketbookError::Export(e.to_string());

    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(["Title", "Amount"]).map_err(to_export)?;
    for entry in &entries {
        csv_writer
            .write_record([entry.title.as_str(), entry.amount.as_str()])
            .map_err(to_export)?;
    }
    csv_writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;

    Ok(())
}
