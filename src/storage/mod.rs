//! Storage layer for Pocketbook
//!
//! A key-value namespace of JSON documents with atomic writes and per-key
//! locking, plus the two repositories that live in it:
//!
//! - `userDetails`: the credential list ([`CredentialStore`])
//! - `transactions`: the per-user ledgers ([`LedgerStore`])

pub mod credentials;
pub mod file_io;
pub mod ledger;
pub mod namespace;

pub use credentials::{CredentialStore, USER_DETAILS_KEY};
pub use file_io::{read_json, write_json_atomic};
pub use ledger::{LedgerStore, TRANSACTIONS_KEY};
pub use namespace::Namespace;

use std::sync::Arc;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    pub credentials: CredentialStore,
    pub ledger: LedgerStore,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open storage under the given paths, creating directories as needed
    pub fn new(paths: PocketbookPaths) -> Result<Self, PocketbookError> {
        paths.ensure_directories()?;

        let namespace = Arc::new(Namespace::new(paths.data_dir()));

        Ok(Self {
            credentials: CredentialStore::new(Arc::clone(&namespace)),
            ledger: LedgerStore::new(namespace),
            audit: Some(AuditLogger::new(paths.audit_log())),
        })
    }

    /// Stop writing audit records
    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    /// The audit logger, if auditing is on
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an audit entry when auditing is on
    pub fn log_audit(&self, entry: &AuditEntry) -> Result<(), PocketbookError> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }
}
