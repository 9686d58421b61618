//! Account CLI commands
//!
//! Registration and login.

use crate::error::{PocketbookError, PocketbookResult};
use crate::services::AuthService;
use crate::storage::Storage;
use crate::validation::RegistrationForm;

use super::{prepare_form, with_session, PasswordArgs};

/// Handle `register`
///
/// When the password comes from a flag or the environment and no explicit
/// confirmation is given, the password confirms itself.
pub fn handle_register_command(
    storage: &Storage,
    email: &str,
    password: &PasswordArgs,
    confirm_password: Option<String>,
) -> PocketbookResult<()> {
    let password_given = password.password.is_some();
    let first = password.resolve("Password: ")?;
    let confirm = match confirm_password {
        Some(confirm) => confirm,
        None if password_given => first.clone(),
        None => rpassword::prompt_password("Confirm Password: ")
            .map_err(|e| PocketbookError::Io(format!("Failed to read password: {}", e)))?,
    };

    let mut form = prepare_form(RegistrationForm::new(email, first, confirm))?;
    let user = AuthService::new(storage).register(form.values())?;
    form.mark_submitted()?;

    println!("User added successfully.");
    println!("Your ledger is filed under '{}'.", user);
    Ok(())
}

/// Handle `login`: check credentials and report the user name
pub fn handle_login_command(
    storage: &Storage,
    email: &str,
    password: &PasswordArgs,
) -> PocketbookResult<()> {
    with_session(storage, email, password, |user| {
        println!("Logged in as {}.", user);
        Ok(())
    })
}
