//! YAML export

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::export::json::LedgerExport;
use crate::models::UserName;
use crate::storage::Storage;

/// Export a user's ledger as YAML with a short header comment
pub fn export_ledger_yaml<W: Write>(
    storage: &Storage,
    user: &UserName,
    writer: &mut W,
) -> PocketbookResult<()> {
    let export = LedgerExport::from_storage(storage, user)?;
    let to_export = |e: std::io::Error| PocketbookError::Export(e.to_string());

    writeln!(writer, "# Pocketbook ledger export for {}", export.user).map_err(to_export)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export)?;
    writeln!(writer).map_err(to_export)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PocketbookError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketbookPaths;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let user = UserName::new("jane");
        storage.ledger.add_entry(&user, "Coffee", "5").unwrap();

        let mut out = Vec::new();
        export_ledger_yaml(&storage, &user, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# Pocketbook ledger export for jane"));
        assert!(text.contains("title: Coffee"));
        assert!(text.contains("total_cents: 500"));
    }
}
