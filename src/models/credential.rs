//! Stored login credential

use serde::{Deserialize, Serialize};

use super::user_name::UserName;

/// An email/password pair identifying a registered account
///
/// Serialized exactly as `{"email": ..., "password": ...}` inside the
/// `userDetails` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    pub email: String,
    pub password: String,
}

impl UserCredential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive email comparison
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }

    /// Both fields must match exactly
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// Ledger name for this account
    pub fn user_name(&self) -> UserName {
        UserName::from_email(&self.email)
    }
}
