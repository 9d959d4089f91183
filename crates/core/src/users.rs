//! Account input rules for registration.

use crate::error::CoreError;
use crate::tracks::ensure_no_nul;

/// Maximum username length, in characters.
pub const MAX_USERNAME_LEN: usize = 150;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate a username: 1 to 150 characters of letters, digits and `@.+-_`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if len == 0 || len > MAX_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be between 1 and {MAX_USERNAME_LEN} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(CoreError::Validation(
            "Username may contain only letters, digits and @/./+/-/_".into(),
        ));
    }
    Ok(())
}

/// Validate an optional contact email. Empty is allowed.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    ensure_no_nul("Email", email)
}

/// Validate that a password meets the minimum length.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_username_accepted() {
        assert!(validate_username("dj.alice+1@home").is_ok());
    }

    #[test]
    fn empty_username_rejected() {
        assert!(validate_username("").is_err());
    }

    #[test]
    fn username_with_space_rejected() {
        assert!(validate_username("dj alice").is_err());
    }

    #[test]
    fn long_username_rejected() {
        assert!(validate_username(&"u".repeat(151)).is_err());
    }

    #[test]
    fn nul_username_rejected() {
        assert!(validate_username("dj\0alice").is_err());
    }

    #[test]
    fn email_may_be_empty_but_not_contain_nul() {
        assert!(validate_email("").is_ok());
        assert!(validate_email("a\0@x.com").is_err());
    }

    #[test]
    fn short_password_rejected() {
        let err = validate_password("short").unwrap_err();
        assert!(err.to_string().contains("at least 8 characters"));
    }

    #[test]
    fn password_at_minimum_accepted() {
        assert!(validate_password("eightchr").is_ok());
    }
}
