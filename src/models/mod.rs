//! Core data models for Pocketbook
//!
//! Credentials, ledger entries, the user name a ledger is filed under, and
//! the parsed view of an entry amount.

pub mod amount;
pub mod credential;
pub mod entry;
pub mod user_name;

pub use amount::{Amount, AmountParseError};
pub use credential::UserCredential;
pub use entry::LedgerEntry;
pub use user_name::UserName;

use std::collections::BTreeMap;

/// Every user's entries, keyed by user name; each list keeps insertion order
///
/// User names are kept sorted, so the `transactions` object is rewritten
/// with its keys in name order rather than the order users first appeared.
/// The document is equivalent either way; only entry order within a user
/// carries meaning.
pub type Ledger = BTreeMap<UserName, Vec<LedgerEntry>>;
