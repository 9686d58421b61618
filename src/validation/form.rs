//! Forms and their submission lifecycle
//!
//! A [`FormSession`] wraps one of the form value types and tracks where it is
//! in the lifecycle:
//!
//! ```text
//! Pristine -> Editing -> Validating -> Valid -> Submitted
//!                ^                 \
//!                |                  -> Invalid
//!                +---------------------/
//! ```
//!
//! `reset` returns to `Pristine` from any state, which is what re-entering a
//! screen does.

use std::fmt;

use thiserror::Error;

use super::rules::{
    validate_amount, validate_confirm_password, validate_email, validate_password, validate_title,
};
use super::{fields, ValidationErrors};

/// Anything that can be checked field by field
pub trait Form: Default + Clone {
    /// Run every field rule and collect all failures
    fn validate(&self) -> ValidationErrors;
}

/// Login form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Email and password as submitted to the credential store (trimmed)
    pub fn credentials(&self) -> (&str, &str) {
        (self.email.trim(), self.password.trim())
    }
}

impl Form for LoginForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check(fields::EMAIL, validate_email(&self.email));
        errors.check(fields::PASSWORD, validate_password(&self.password));
        errors
    }
}

/// Registration form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Email and password as stored by the credential store (trimmed)
    pub fn credentials(&self) -> (&str, &str) {
        (self.email.trim(), self.password.trim())
    }
}

impl Form for RegistrationForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check(fields::EMAIL, validate_email(&self.email));
        errors.check(fields::PASSWORD, validate_password(&self.password));
        errors.check(
            fields::CONFIRM_PASSWORD,
            validate_confirm_password(&self.password, &self.confirm_password),
        );
        errors
    }
}

/// Ledger entry form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub amount: String,
}

impl EntryForm {
    pub fn new(title: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
        }
    }
}

impl Form for EntryForm {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check(fields::TITLE, validate_title(&self.title));
        errors.check(fields::AMOUNT, validate_amount(&self.amount));
        errors
    }
}

/// Lifecycle state of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// Freshly shown, nothing typed yet
    #[default]
    Pristine,
    /// At least one field changed since the last check
    Editing,
    /// Rules are being evaluated
    Validating,
    /// Last check passed; ready to submit
    Valid,
    /// Last check failed; field errors are shown
    Invalid,
    /// Handed to the store
    Submitted,
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pristine => write!(f, "pristine"),
            Self::Editing => write!(f, "editing"),
            Self::Validating => write!(f, "validating"),
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
            Self::Submitted => write!(f, "submitted"),
        }
    }
}

/// Rejected lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move form from {from} to {to}")]
pub struct TransitionError {
    pub from: FormState,
    pub to: FormState,
}

/// A form together with its lifecycle state and last validation result
#[derive(Debug, Clone, Default)]
pub struct FormSession<F: Form> {
    values: F,
    state: FormState,
    errors: ValidationErrors,
}

impl<F: Form> FormSession<F> {
    /// Start a pristine session with default (empty) values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    /// Errors from the last validation pass
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Change field values
    ///
    /// Not allowed once the form has been submitted; `reset` first.
    pub fn edit(&mut self, change: impl FnOnce(&mut F)) -> Result<(), TransitionError> {
        if self.state == FormState::Submitted {
            return Err(TransitionError {
                from: self.state,
                to: FormState::Editing,
            });
        }

        change(&mut self.values);
        self.state = FormState::Editing;
        Ok(())
    }

    /// Validate the current values
    ///
    /// Ends in `Valid` or `Invalid`. Submitting an untouched or previously
    /// invalid form passes through `Editing` implicitly.
    pub fn validate(&mut self) -> Result<&ValidationErrors, TransitionError> {
        match self.state {
            FormState::Pristine | FormState::Editing | FormState::Invalid => {}
            from => {
                return Err(TransitionError {
                    from,
                    to: FormState::Validating,
                })
            }
        }

        self.state = FormState::Validating;
        self.errors = self.values.validate();
        self.state = if self.errors.is_empty() {
            FormState::Valid
        } else {
            FormState::Invalid
        };

        Ok(&self.errors)
    }

    /// Mark a valid form as handed over to the store
    pub fn mark_submitted(&mut self) -> Result<(), TransitionError> {
        if self.state != FormState::Valid {
            return Err(TransitionError {
                from: self.state,
                to: FormState::Submitted,
            });
        }
        self.state = FormState::Submitted;
        Ok(())
    }

    /// Back to `Pristine` with empty values and no errors
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_collects_all_fields() {
        let form = LoginForm::new("nope", "abc");
        let errors = form.validate();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(fields::EMAIL), Some("Invalid email format!"));
        assert_eq!(
            errors.get(fields::PASSWORD),
            Some("Password must be at least 8 characters long!")
        );
    }

    #[test]
    fn test_registration_form() {
        let form = RegistrationForm::new("jane@example.com", "Abcdefg1@", "Abcdefg1#");
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(fields::CONFIRM_PASSWORD), Some("Passwords must match"));

        let form = RegistrationForm::new("jane@example.com", "Abcdefg1@", "Abcdefg1@");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_entry_form_empty() {
        let errors = EntryForm::default().validate();
        assert_eq!(errors.get(fields::TITLE), Some("Title is required!"));
        assert_eq!(errors.get(fields::AMOUNT), Some("Amount is required!"));
    }

    #[test]
    fn test_credentials_are_trimmed() {
        let form = LoginForm::new(" jane@example.com ", " Abcdefg1@ ");
        assert_eq!(form.credentials(), ("jane@example.com", "Abcdefg1@"));
    }

    #[test]
    fn test_lifecycle_happy_path() {
        let mut session = FormSession::<EntryForm>::new();
        assert_eq!(session.state(), FormState::Pristine);

        session
            .edit(|f| {
                f.title = "Coffee".into();
                f.amount = "5".into();
            })
            .unwrap();
        assert_eq!(session.state(), FormState::Editing);

        assert!(session.validate().unwrap().is_empty());
        assert_eq!(session.state(), FormState::Valid);

        session.mark_submitted().unwrap();
        assert_eq!(session.state(), FormState::Submitted);
    }

    #[test]
    fn test_invalid_then_edit_again() {
        let mut session = FormSession::<EntryForm>::new();
        assert_eq!(session.validate().unwrap().len(), 2);
        assert_eq!(session.state(), FormState::Invalid);

        session.edit(|f| f.title = "Coffee".into()).unwrap();
        assert_eq!(session.state(), FormState::Editing);

        let errors = session.validate().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.has(fields::AMOUNT));
    }

    #[test]
    fn test_illegal_transitions() {
        let mut session = FormSession::<EntryForm>::new();
        let err = session.mark_submitted().unwrap_err();
        assert_eq!(err.from, FormState::Pristine);
        assert_eq!(err.to, FormState::Submitted);

        session.edit(|f| *f = EntryForm::new("Coffee", "5")).unwrap();
        session.validate().unwrap();
        session.mark_submitted().unwrap();

        assert!(session.edit(|f| f.title.clear()).is_err());
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_reset_returns_to_pristine() {
        let mut session = FormSession::<LoginForm>::new();
        session.edit(|f| f.email = "bad".into()).unwrap();
        session.validate().unwrap();
        assert!(!session.errors().is_empty());

        session.reset();
        assert_eq!(session.state(), FormState::Pristine);
        assert!(session.errors().is_empty());
        assert_eq!(session.values(), &LoginForm::default());
    }
}
