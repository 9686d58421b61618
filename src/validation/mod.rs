//! Form validation for Pocketbook
//!
//! Pure rule-checking over the login, registration and ledger entry forms.
//! No I/O happens here; the service layer runs these checks before touching
//! storage.
//!
//! Every field is checked independently and all failing fields are reported
//! together. Within one field only the first failing rule is reported, so a
//! field never carries more than one message.

pub mod form;
pub mod rules;

pub use form::{EntryForm, Form, FormSession, FormState, LoginForm, RegistrationForm, TransitionError};
pub use rules::{
    validate_amount, validate_confirm_password, validate_email, validate_password, validate_title,
    PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, PASSWORD_SPECIAL_CHARS,
};

use std::collections::BTreeMap;
use std::fmt;

/// Field names used as keys in [`ValidationErrors`]
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const TITLE: &str = "title";
    pub const AMOUNT: &str = "amount";
}

/// Mapping from field name to error message
///
/// A field absent from the map is valid. A submission is accepted only when
/// the map is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Create an empty (valid) result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any earlier one
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Record the outcome of a single field check
    pub fn check(&mut self, field: &str, outcome: Result<(), &'static str>) {
        if let Err(message) = outcome {
            self.insert(field, message);
        }
    }

    /// Get the message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Check whether a field failed
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over `(field, message)` pairs in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert into a `Result`, succeeding only when no field failed
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}
