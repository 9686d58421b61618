//! CLI command handlers
//!
//! The command line is the presentation layer: it collects field input,
//! walks each form through its lifecycle, calls the services and renders
//! the outcome. Field errors are printed inline; everything else becomes a
//! banner.

pub mod account;
pub mod config;
pub mod entry;
pub mod export;

pub use account::{handle_login_command, handle_register_command};
pub use config::{handle_config_command, ConfigCommands};
pub use entry::{handle_entry_command, EntryCommands};
pub use export::handle_export_command;

use std::time::{Duration, Instant};

use clap::Args;

use crate::banner::{Banner, BannerSlot};
use crate::config::Settings;
use crate::display::{format_banner, format_field_errors};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::UserName;
use crate::services::AuthService;
use crate::session::Session;
use crate::storage::Storage;
use crate::validation::{Form, FormSession, LoginForm};

/// Password input shared by every command that needs one
#[derive(Args, Debug, Clone, Default)]
pub struct PasswordArgs {
    /// Account password (prompted for when omitted)
    #[arg(long, env = "POCKETBOOK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl PasswordArgs {
    /// The supplied password, or one read from the terminal
    pub fn resolve(&self, prompt: &str) -> PocketbookResult<String> {
        match &self.password {
            Some(password) => Ok(password.clone()),
            None => rpassword::prompt_password(prompt)
                .map_err(|e| PocketbookError::Io(format!("Failed to read password: {}", e))),
        }
    }
}

/// Walk a form from `Pristine` to `Valid`, or fail with its field errors
pub fn prepare_form<F: Form>(values: F) -> PocketbookResult<FormSession<F>> {
    let mut form = FormSession::new();
    form.edit(|f| *f = values)?;

    let errors = form.validate()?;
    if !errors.is_empty() {
        return Err(PocketbookError::Validation(errors.clone()));
    }
    Ok(form)
}

fn login(storage: &Storage, email: &str, password: &PasswordArgs) -> PocketbookResult<Session> {
    let password = password.resolve("Password: ")?;
    let mut form = prepare_form(LoginForm::new(email, password))?;

    let session = AuthService::new(storage).login(form.values())?;
    form.mark_submitted()?;
    Ok(session)
}

/// Log in, run `action` as the logged-in user, then log out
///
/// The session lives for one command only.
pub fn with_session<T>(
    storage: &Storage,
    email: &str,
    password: &PasswordArgs,
    action: impl FnOnce(&UserName) -> PocketbookResult<T>,
) -> PocketbookResult<T> {
    let mut session = login(storage, email, password)?;
    let result = session.require_user().and_then(action);
    session.logout();
    tracing::debug!("session closed");
    result
}

/// Render a failed command for the terminal
pub fn render_error(err: &PocketbookError, settings: &Settings) -> String {
    if let Some(errors) = err.field_errors() {
        return format!("Please fix the following:\n{}", format_field_errors(errors));
    }

    let now = Instant::now();
    let mut slot = BannerSlot::new();
    if let Some(message) = err.banner_message() {
        slot.show(
            Banner::error(message, now)
                .with_timeout(Duration::from_secs(settings.banner_timeout_secs)),
        );
    }

    match slot.current(now) {
        Some(banner) => format_banner(banner),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{fields, EntryForm, FormState};

    #[test]
    fn test_prepare_form_valid() {
        let form = prepare_form(EntryForm::new("Coffee", "5")).unwrap();
        assert_eq!(form.state(), FormState::Valid);
    }

    #[test]
    fn test_prepare_form_invalid() {
        let err = prepare_form(EntryForm::new("", "5")).unwrap_err();
        assert!(err.field_errors().unwrap().has(fields::TITLE));
    }

    #[test]
    fn test_render_field_errors() {
        let err = prepare_form(EntryForm::new("", "")).unwrap_err();
        let text = render_error(&err, &Settings::default());
        assert!(text.contains("amount: Amount is required!"));
        assert!(text.contains("title: Title is required!"));
    }

    #[test]
    fn test_render_banner() {
        let text = render_error(&PocketbookError::InvalidCredentials, &Settings::default());
        assert_eq!(text, "[Error] Invalid email or password.");
    }

    #[test]
    fn test_zero_timeout_falls_back_to_plain_message() {
        let mut settings = Settings::default();
        settings.banner_timeout_secs = 0;
        let text = render_error(&PocketbookError::InvalidCredentials, &settings);
        assert_eq!(text, "Invalid email or password.");
    }
}
