//! User name derived from an email address

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name a ledger is filed under: the local part of the user's email
///
/// Two accounts whose emails share a local part (`jo@a.com`, `jo@b.com`)
/// share one ledger.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Wrap an existing name as-is
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derive the name from an email: everything before the first `@`,
    /// or the whole string when there is none
    pub fn from_email(email: &str) -> Self {
        let local = email.split('@').next().unwrap_or(email);
        Self(local.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email() {
        assert_eq!(UserName::from_email("jane@example.com").as_str(), "jane");
        assert_eq!(UserName::from_email("a@b@c").as_str(), "a");
        assert_eq!(UserName::from_email("no-at-sign").as_str(), "no-at-sign");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = UserName::new("jane");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"jane\"");
    }
}
