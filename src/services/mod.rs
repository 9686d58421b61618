//! Service layer for Pocketbook
//!
//! Services run the flow the presentation layer drives: validate the form,
//! call the store, record the change, and hand back a result to display.
//! Storage failures are logged here and the operation is abandoned; nothing
//! is retried.

pub mod auth;
pub mod ledger;

pub use auth::AuthService;
pub use ledger::{LedgerService, LedgerSummary};

use crate::audit::AuditEntry;
use crate::error::PocketbookResult;
use crate::storage::Storage;

/// Log a storage failure before passing it on
fn log_storage_failure<T>(operation: &str, result: PocketbookResult<T>) -> PocketbookResult<T> {
    if let Err(err) = &result {
        if err.is_storage() {
            tracing::error!(operation, error = %err, "storage access failed");
        }
    }
    result
}

/// Write an audit record; the change is already committed, so a failure
/// here is reported but does not fail the operation
fn record(storage: &Storage, entry: &AuditEntry) {
    if let Err(err) = storage.log_audit(entry) {
        tracing::warn!(error = %err, "failed to write audit entry");
    }
}
