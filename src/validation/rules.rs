//! Field rules
//!
//! Each validator returns the message of the first rule the value breaks.

use email_address::EmailAddress;

/// Minimum password length, inclusive
pub const PASSWORD_MIN_LEN: usize = 8;

/// Maximum password length, inclusive
pub const PASSWORD_MAX_LEN: usize = 30;

/// A password must contain at least one of these
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&#";

/// Validate an email field
///
/// The value is trimmed before checking.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();

    if email.is_empty() {
        return Err("Email is required!");
    }

    if !EmailAddress::is_valid(email) {
        return Err("Invalid email format!");
    }

    Ok(())
}

/// Validate a password field
///
/// The value is trimmed before checking. Length is counted in characters.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    let password = password.trim();

    if password.is_empty() {
        return Err("Password is required!");
    }

    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err("Password must be at least 8 characters long!");
    }
    if len > PASSWORD_MAX_LEN {
        return Err("Password must be less than 30 characters long!");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter!");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter!");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit!");
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err("Password must contain at least one special character!");
    }

    Ok(())
}

/// Validate the confirmation field of the registration form
///
/// Compared against the password exactly, without trimming.
pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if confirm.is_empty() {
        return Err("Confirm Password is required!");
    }

    if confirm != password {
        return Err("Passwords must match");
    }

    Ok(())
}

/// Validate a ledger entry title
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title is required!");
    }
    Ok(())
}

/// Validate a ledger entry amount
///
/// Only presence is checked; the text is not required to be numeric.
pub fn validate_amount(amount: &str) -> Result<(), &'static str> {
    if amount.trim().is_empty() {
        return Err("Amount is required!");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(""), Err("Email is required!"));
        assert_eq!(validate_email("   "), Err("Email is required!"));
        assert_eq!(validate_email("not-an-email"), Err("Invalid email format!"));
        assert_eq!(validate_email("jane@"), Err("Invalid email format!"));
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("  jane@example.com  ").is_ok());
    }

    #[test]
    fn test_short_password_reports_length() {
        assert_eq!(
            validate_password("abc"),
            Err("Password must be at least 8 characters long!")
        );
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("Abcdefg1@").is_ok());
        assert!(validate_password("  Abcdefg1@  ").is_ok());
    }

    #[test]
    fn test_password_length_bounds() {
        // Exactly 8 and exactly 30 are accepted
        assert!(validate_password("Abcdef1#").is_ok());
        let thirty = format!("Ab1#{}", "x".repeat(26));
        assert_eq!(thirty.len(), 30);
        assert!(validate_password(&thirty).is_ok());

        let thirty_one = format!("{}x", thirty);
        assert_eq!(
            validate_password(&thirty_one),
            Err("Password must be less than 30 characters long!")
        );
    }

    #[test]
    fn test_password_character_classes() {
        assert_eq!(
            validate_password("ABCDEFG1@"),
            Err("Password must contain at least one lowercase letter!")
        );
        assert_eq!(
            validate_password("abcdefg1@"),
            Err("Password must contain at least one uppercase letter!")
        );
        assert_eq!(
            validate_password("Abcdefgh@"),
            Err("Password must contain at least one digit!")
        );
        assert_eq!(
            validate_password("Abcdefgh1"),
            Err("Password must contain at least one special character!")
        );
        assert_eq!(validate_password(""), Err("Password is required!"));
    }

    #[test]
    fn test_every_special_char_is_accepted() {
        for c in PASSWORD_SPECIAL_CHARS.chars() {
            let password = format!("Abcdefg1{}", c);
            assert!(validate_password(&password).is_ok(), "rejected {}", c);
        }
        assert!(validate_password("Abcdefg1^").is_err());
    }

    #[test]
    fn test_confirm_password() {
        assert_eq!(
            validate_confirm_password("Abcdefg1@", ""),
            Err("Confirm Password is required!")
        );
        assert_eq!(
            validate_confirm_password("Abcdefg1@", "Abcdefg1!"),
            Err("Passwords must match")
        );
        assert_eq!(
            validate_confirm_password("Abcdefg1@", "Abcdefg1@ "),
            Err("Passwords must match")
        );
        assert!(validate_confirm_password("Abcdefg1@", "Abcdefg1@").is_ok());
    }

    #[test]
    fn test_title_and_amount() {
        assert_eq!(validate_title("  "), Err("Title is required!"));
        assert!(validate_title("Coffee").is_ok());
        assert_eq!(validate_amount(""), Err("Amount is required!"));
        // Free text is accepted
        assert!(validate_amount("five").is_ok());
    }
}
