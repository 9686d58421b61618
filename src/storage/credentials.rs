//! Credential store
//!
//! Keeps every registered account in the `userDetails` record as a JSON
//! array of `{email, password}`. All operations read the whole list.

use std::sync::Arc;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{UserCredential, UserName};

use super::namespace::Namespace;

/// Record holding the credential list
pub const USER_DETAILS_KEY: &str = "userDetails";

/// Repository for registered accounts
pub struct CredentialStore {
    namespace: Arc<Namespace>,
}

impl CredentialStore {
    pub fn new(namespace: Arc<Namespace>) -> Self {
        Self { namespace }
    }

    fn load(&self) -> PocketbookResult<Vec<UserCredential>> {
        self.namespace.get(USER_DETAILS_KEY)
    }

    /// Register a new account
    ///
    /// Fails with [`PocketbookError::EmailExists`] when the email (compared
    /// exactly) is already stored; the list is left untouched in that case.
    pub fn register(&self, email: &str, password: &str) -> PocketbookResult<()> {
        self.namespace
            .transact(USER_DETAILS_KEY, |users: &mut Vec<UserCredential>| {
                if users.iter().any(|u| u.has_email(email)) {
                    return Err(PocketbookError::EmailExists(email.to_string()));
                }
                users.push(UserCredential::new(email, password));
                Ok(())
            })
    }

    /// Look up an account by email and password
    ///
    /// Returns the ledger name for the account, or `None` when no stored
    /// pair matches both fields exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> PocketbookResult<Option<UserName>> {
        let users = self.load()?;
        Ok(users
            .iter()
            .find(|u| u.matches(email, password))
            .map(UserCredential::user_name))
    }

    /// Check whether an email is registered
    pub fn exists(&self, email: &str) -> PocketbookResult<bool> {
        Ok(self.load()?.iter().any(|u| u.has_email(email)))
    }

    /// Number of registered accounts
    pub fn count(&self) -> PocketbookResult<usize> {
        Ok(self.load()?.len())
    }
}
