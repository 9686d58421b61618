//! Ledger service
//!
//! Adds, removes and lists a user's entries. The user is always passed in
//! explicitly, usually from [`crate::session::Session::require_user`].

use crate::audit::AuditEntry;
use crate::error::PocketbookResult;
use crate::models::entry::total as ledger_total;
use crate::models::{Amount, LedgerEntry, UserName};
use crate::storage::Storage;
use crate::validation::{EntryForm, Form};

use super::{log_storage_failure, record};

/// A user's entries with their total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSummary {
    pub user: UserName,
    pub entries: Vec<LedgerEntry>,
    /// Sum of the amounts that parse as numbers; `None` when out of range
    pub total: Option<Amount>,
    /// Entries whose amount text is not a number
    pub unparsed: usize,
}

/// Service for ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append an entry
    ///
    /// Title and amount are stored trimmed. Duplicate titles are allowed.
    pub fn add(&self, user: &UserName, form: &EntryForm) -> PocketbookResult<LedgerEntry> {
        form.validate().into_result()?;

        let entry = LedgerEntry::new(form.title.trim(), form.amount.trim());
        log_storage_failure(
            "add_entry",
            self.storage
                .ledger
                .add_entry(user, &entry.title, &entry.amount),
        )?;

        tracing::info!(user = %user, title = %entry.title, "entry added");
        record(
            self.storage,
            &AuditEntry::entry_added(user, &entry.title, &entry),
        );

        Ok(entry)
    }

    /// Remove every entry with this title; returns how many went
    ///
    /// The title is trimmed the same way `add` trims it before storing.
    pub fn remove(&self, user: &UserName, title: &str) -> PocketbookResult<usize> {
        let title = title.trim();
        let removed = log_storage_failure(
            "remove_entry",
            self.storage.ledger.remove_entry(user, title),
        )?;

        if removed > 0 {
            tracing::info!(user = %user, title, removed, "entries removed");
            record(
                self.storage,
                &AuditEntry::entries_removed(user, title, removed),
            );
        } else {
            tracing::debug!(user = %user, title, "no entries matched");
        }

        Ok(removed)
    }

    /// A user's entries in insertion order
    pub fn list(&self, user: &UserName) -> PocketbookResult<Vec<LedgerEntry>> {
        log_storage_failure("list_entries", self.storage.ledger.list_entries(user))
    }

    /// A user's entries with the total of their numeric amounts
    pub fn summary(&self, user: &UserName) -> PocketbookResult<LedgerSummary> {
        let entries = self.list(user)?;
        let unparsed = entries
            .iter()
            .filter(|e| e.parsed_amount().is_err())
            .count();

        let total = ledger_total(&entries);
        if total.is_none() {
            tracing::warn!(user = %user, "ledger total out of range");
        }

        Ok(LedgerSummary {
            user: user.clone(),
            total,
            entries,
            unparsed,
        })
    }
}
