//! Custom error types for Pocketbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::validation::{TransitionError, ValidationErrors};

/// The main error type for Pocketbook operations
#[derive(Error, Debug)]
pub enum PocketbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Field-level form errors, shown inline next to each field
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// Registration attempted with an email that is already stored
    #[error("Email already exists: {0}")]
    EmailExists(String),

    /// No stored credential matched the email/password pair
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Failure reading or writing the persisted namespace
    #[error("Storage error: {0}")]
    Storage(String),

    /// Form used out of lifecycle order
    #[error("Form error: {0}")]
    Form(#[from] TransitionError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PocketbookError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Field errors carried by a validation failure, if any
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Message suitable for a transient banner.
    ///
    /// Validation failures are shown inline, so they produce no banner.
    pub fn banner_message(&self) -> Option<String> {
        match self {
            Self::Validation(_) => None,
            Self::EmailExists(_) => Some("Email already exists.".to_string()),
            Self::InvalidCredentials => Some("Invalid email or password.".to_string()),
            other => Some(other.to_string()),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PocketbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ValidationErrors> for PocketbookError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias for Pocketbook operations
pub type PocketbookResult<T> = Result<T, PocketbookError>;
