//! Pocketbook - per-user personal ledger
//!
//! This library holds the data and validation logic behind Pocketbook: a
//! credential store for email/password accounts, a ledger store of titled
//! amounts per user, and the form rules that guard both. Everything is
//! persisted as JSON documents in a local key-value namespace.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Credentials, ledger entries, user names and amounts
//! - `validation`: Field rules, forms and the form lifecycle
//! - `storage`: Key-value namespace and the two stores on top of it
//! - `services`: Validate-then-store flows for registration, login and ledger edits
//! - `session`: In-memory login state
//! - `banner`: Transient user-visible messages
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export of a ledger
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `pocketbook` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::config::PocketbookPaths;
//! use pocketbook::services::{AuthService, LedgerService};
//! use pocketbook::storage::Storage;
//! use pocketbook::validation::{EntryForm, LoginForm};
//!
//! let storage = Storage::new(PocketbookPaths::new()?)?;
//! let session = AuthService::new(&storage).login(&LoginForm::new(email, password))?;
//! LedgerService::new(&storage).add(session.require_user()?, &EntryForm::new("Coffee", "5"))?;
//! ```

pub mod audit;
pub mod banner;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;
pub mod validation;

pub use error::{PocketbookError, PocketbookResult};
