//! Signup input rules, checked before anything is sent.
//!
//! - email: `^[a-zA-Z0-9._%+-]+@gmail\.com$`
//! - password: at least 8 characters with an ASCII letter, an ASCII digit and
//!   a non-alphanumeric character
//! - confirmation must equal the password exactly

use crate::error::ValidationError;

const REQUIRED_DOMAIN: &str = "@gmail.com";
const MIN_PASSWORD_LEN: usize = 8;

/// # Errors
///
/// [`ValidationError::InvalidEmail`] unless the local part is non-empty,
/// uses only `[a-zA-Z0-9._%+-]`, and the domain is exactly `gmail.com`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let local = email
        .strip_suffix(REQUIRED_DOMAIN)
        .ok_or(ValidationError::InvalidEmail)?;
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '%' | '+' | '-'));
    if local_ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// # Errors
///
/// [`ValidationError::WeakPassword`] if any strength rule fails.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_letter = password.chars().any(|ch| ch.is_ascii_alphabetic());
    let has_digit = password.chars().any(|ch| ch.is_ascii_digit());
    let has_special = password.chars().any(|ch| !ch.is_ascii_alphanumeric());
    if long_enough && has_letter && has_digit && has_special {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

/// Validate a full signup form. Returns the trimmed email on success.
///
/// # Errors
///
/// The first failing rule, checked in the order email, password, confirmation.
pub fn validate_signup<'a>(
    email: &'a str,
    password: &str,
    confirm: &str,
) -> Result<&'a str, ValidationError> {
    let email = email.trim();
    validate_email(email)?;
    validate_password(password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@gmail.com")]
    #[case("first.last+tag@gmail.com")]
    #[case("a_b%c-d@gmail.com")]
    fn accepts_gmail_addresses(#[case] email: &str) {
        assert_eq!(validate_email(email), Ok(()));
    }

    #[rstest]
    #[case("user@yahoo.com")]
    #[case("@gmail.com")]
    #[case("user@gmail.co")]
    #[case("user@GMAIL.com")]
    #[case("us er@gmail.com")]
    #[case("user@sub.gmail.com")]
    #[case("user@gmail.com.evil")]
    fn rejects_other_addresses(#[case] email: &str) {
        assert_eq!(validate_email(email), Err(ValidationError::InvalidEmail));
    }

    #[rstest]
    #[case("Abc12345!")]
    #[case("p@ssw0rd")]
    #[case("1234567a ")]
    fn accepts_strong_passwords(#[case] password: &str) {
        assert_eq!(validate_password(password), Ok(()));
    }

    #[rstest]
    #[case("Ab1!")]
    #[case("abcdefgh!")]
    #[case("12345678!")]
    #[case("Abc123456")]
    #[case("")]
    fn rejects_weak_passwords(#[case] password: &str) {
        assert_eq!(
            validate_password(password),
            Err(ValidationError::WeakPassword)
        );
    }

    #[test]
    fn signup_requires_matching_confirmation() {
        assert_eq!(
            validate_signup("user@gmail.com", "Abc12345!", "Abc12345?"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_signup(" user@gmail.com ", "Abc12345!", "Abc12345!"),
            Ok("user@gmail.com")
        );
    }

    #[test]
    fn signup_reports_email_first() {
        assert_eq!(
            validate_signup("user@yahoo.com", "weak", "other"),
            Err(ValidationError::InvalidEmail)
        );
    }
}
