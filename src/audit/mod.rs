//! Audit logging system for Pocketbook
//!
//! Records registrations and ledger changes in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single record with timestamp, operation, the affected
//!   user and a JSON snapshot of what was created or removed.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back.
//!
//! Passwords are never part of an audit record.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
