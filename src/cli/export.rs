//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{PocketbookError, PocketbookResult};
use crate::export::{export_ledger, ExportFormat};
use crate::storage::Storage;

use super::{with_session, PasswordArgs};

/// Handle `export`: write the ledger to a file or stdout
pub fn handle_export_command(
    storage: &Storage,
    email: &str,
    format: &str,
    output: Option<&Path>,
    password: &PasswordArgs,
) -> PocketbookResult<()> {
    let format: ExportFormat = format.parse()?;
    with_session(storage, email, password, |user| match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                PocketbookError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_ledger(storage, user, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| PocketbookError::Export(e.to_string()))?;
            println!("Exported {} ledger to {}", format, path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_ledger(storage, user, format, &mut handle)
        }
    })
}
