//! Authentication service
//!
//! Registration and login on top of the credential store.

use crate::audit::AuditEntry;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::UserName;
use crate::session::Session;
use crate::storage::Storage;
use crate::validation::{Form, LoginForm, RegistrationForm};

use super::{log_storage_failure, record};

/// Service for account registration and login
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new account
    ///
    /// Returns the user name the account's ledger is filed under.
    pub fn register(&self, form: &RegistrationForm) -> PocketbookResult<UserName> {
        form.validate().into_result()?;

        let (email, password) = form.credentials();
        log_storage_failure(
            "register",
            self.storage.credentials.register(email, password),
        )?;

        tracing::info!(user = %UserName::from_email(email), "account registered");
        record(self.storage, &AuditEntry::account_registered(email));

        Ok(UserName::from_email(email))
    }

    /// Check credentials and open a session
    pub fn login(&self, form: &LoginForm) -> PocketbookResult<Session> {
        form.validate().into_result()?;

        let (email, password) = form.credentials();
        let user = log_storage_failure(
            "login",
            self.storage.credentials.authenticate(email, password),
        )?;

        match user {
            Some(user) => {
                tracing::info!(user = %user, "login succeeded");
                let mut session = Session::new();
                session.login(user);
                Ok(session)
            }
            None => {
                tracing::warn!("login failed");
                Err(PocketbookError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketbookPaths;
    use crate::validation::fields;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn registration(email: &str, password: &str) -> RegistrationForm {
        RegistrationForm::new(email, password, password)
    }

    #[test]
    fn test_register_then_login() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        let user = service
            .register(&registration("jane@example.com", "Abcdefg1@"))
            .unwrap();
        assert_eq!(user.as_str(), "jane");

        let session = service
            .login(&LoginForm::new("jane@example.com", "Abcdefg1@"))
            .unwrap();
        assert_eq!(session.require_user().unwrap(), &user);
    }

    #[test]
    fn test_register_duplicate_email() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        service
            .register(&registration("jane@example.com", "Abcdefg1@"))
            .unwrap();
        let err = service
            .register(&registration("jane@example.com", "Zyxwvut9#"))
            .unwrap_err();

        assert!(matches!(err, PocketbookError::EmailExists(_)));
        assert_eq!(storage.credentials.count().unwrap(), 1);
    }

    #[test]
    fn test_register_invalid_form_touches_nothing() {
        let (temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        let err = service
            .register(&RegistrationForm::new("jane", "abc", "abd"))
            .unwrap_err();

        let errors = err.field_errors().unwrap();
        assert!(errors.has(fields::EMAIL));
        assert!(errors.has(fields::PASSWORD));
        assert!(errors.has(fields::CONFIRM_PASSWORD));
        assert!(!temp_dir.path().join("data").join("userDetails.json").exists());
    }

    #[test]
    fn test_login_wrong_password() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        service
            .register(&registration("jane@example.com", "Abcdefg1@"))
            .unwrap();
        let err = service
            .login(&LoginForm::new("jane@example.com", "Abcdefg1#"))
            .unwrap_err();

        assert!(matches!(err, PocketbookError::InvalidCredentials));
    }

    #[test]
    fn test_login_trims_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        service
            .register(&registration("jane@example.com", "Abcdefg1@"))
            .unwrap();
        assert!(service
            .login(&LoginForm::new("  jane@example.com ", "Abcdefg1@ "))
            .is_ok());
        assert!(storage.credentials.exists("jane@example.com").unwrap());
    }

    #[test]
    fn test_audit_never_contains_password() {
        let (temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        service
            .register(&registration("jane@example.com", "Abcdefg1@"))
            .unwrap();

        let log = std::fs::read_to_string(temp_dir.path().join("audit.log")).unwrap();
        assert!(log.contains("jane@example.com"));
        assert!(!log.contains("Abcdefg1@"));
    }

    #[test]
    fn test_corrupt_store_is_storage_error() {
        let (temp_dir, storage) = create_test_storage();
        std::fs::write(
            temp_dir.path().join("data").join("userDetails.json"),
            "garbage",
        )
        .unwrap();

        let err = AuthService::new(&storage)
            .login(&LoginForm::new("jane@example.com", "Abcdefg1@"))
            .unwrap_err();
        assert!(err.is_storage());
    }
}
