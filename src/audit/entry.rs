//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserName;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Account,
    LedgerEntry,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Account => write!(f, "Account"),
            EntityType::LedgerEntry => write!(f, "LedgerEntry"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// User whose data changed
    pub user: UserName,

    /// Human-readable label of the entity (email or entry title)
    pub entity_name: String,

    /// Snapshot of the affected data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        user: UserName,
        entity_name: impl Into<String>,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            user,
            entity_name: entity_name.into(),
            details,
        }
    }

    /// A new account was registered; only the email is recorded
    pub fn account_registered(email: &str) -> Self {
        Self::new(
            Operation::Create,
            EntityType::Account,
            UserName::from_email(email),
            email,
            None,
        )
    }

    /// An entry was appended to a user's ledger
    pub fn entry_added<T: Serialize>(user: &UserName, title: &str, entry: &T) -> Self {
        Self::new(
            Operation::Create,
            EntityType::LedgerEntry,
            user.clone(),
            title,
            serde_json::to_value(entry).ok(),
        )
    }

    /// Entries with `title` were removed from a user's ledger
    pub fn entries_removed(user: &UserName, title: &str, removed: usize) -> Self {
        Self::new(
            Operation::Delete,
            EntityType::LedgerEntry,
            user.clone(),
            title,
            Some(serde_json::json!({ "removed": removed })),
        )
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_name,
            self.user
        )
    }
}
