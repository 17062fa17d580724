//! Validation rules
//!
//! Implements the per-field validation logic. Rules are field-local; there
//! are no cross-field checks. Values are expected to be sanitized before
//! they get here.

use std::fmt;

use crate::error::ValidationError;

/// Minimum accepted password length
const MIN_PASSWORD_LENGTH: usize = 8;

/// A form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    /// All fields, in render order
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Validates a single sanitized field value.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
    }
}

/// Validates an email address of the form `local@domain.tld`: exactly one
/// `@`, no whitespace, non-empty local part, and a dot strictly inside the
/// domain.
fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    if value.contains(char::is_whitespace) {
        return Err(ValidationError::EmailInvalid);
    }

    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::EmailInvalid);
    }

    let len = domain.chars().count();
    let interior_dot = domain
        .chars()
        .enumerate()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < len);
    if !interior_dot {
        return Err(ValidationError::EmailInvalid);
    }

    Ok(())
}

/// Validates a password: required, minimum length, and at least one
/// lowercase letter, one uppercase letter, and one digit in any order.
fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !has_lower || !has_upper || !has_digit {
        return Err(ValidationError::PasswordComposition);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert_eq!(validate_field(Field::Email, "a@b.co"), Ok(()));
        assert_eq!(validate_field(Field::Email, "alice@example.com"), Ok(()));
        assert_eq!(
            validate_field(Field::Email, "first.last@sub.domain.org"),
            Ok(())
        );
    }

    #[test]
    fn test_email_required() {
        assert_eq!(
            validate_field(Field::Email, ""),
            Err(ValidationError::EmailRequired)
        );
        assert_eq!(
            ValidationError::EmailRequired.message(),
            "Email is required"
        );
    }

    #[test]
    fn test_invalid_email_formats() {
        for bad in [
            "bad",
            "no-at-sign.com",
            "@missing-local.com",
            "missing-domain@",
            "two@@ats.com",
            "a@b@c.com",
            "spaces in@mail.com",
            "a@nodot",
            "a@.co",
            "a@co.",
        ] {
            assert_eq!(
                validate_field(Field::Email, bad),
                Err(ValidationError::EmailInvalid),
                "expected {:?} to be invalid",
                bad
            );
        }
    }

    #[test]
    fn test_valid_passwords() {
        assert_eq!(validate_field(Field::Password, "Abcdefg1"), Ok(()));
        assert_eq!(validate_field(Field::Password, "1aB45678"), Ok(()));
        assert_eq!(validate_field(Field::Password, "Sup3rSecret"), Ok(()));
    }

    #[test]
    fn test_password_required() {
        assert_eq!(
            validate_field(Field::Password, ""),
            Err(ValidationError::PasswordRequired)
        );
    }

    #[test]
    fn test_password_length() {
        assert_eq!(
            validate_field(Field::Password, "short1A"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_password_composition() {
        assert_eq!(
            validate_field(Field::Password, "alllower1"),
            Err(ValidationError::PasswordComposition)
        );
        assert_eq!(
            validate_field(Field::Password, "ALLUPPER1"),
            Err(ValidationError::PasswordComposition)
        );
        assert_eq!(
            validate_field(Field::Password, "NoDigitsHere"),
            Err(ValidationError::PasswordComposition)
        );
    }

    #[test]
    fn test_revalidation_is_stable() {
        // Re-validating an already-valid value yields the same result
        for _ in 0..2 {
            assert_eq!(validate_field(Field::Email, "a@b.co"), Ok(()));
            assert_eq!(validate_field(Field::Password, "Abcdefg1"), Ok(()));
        }
    }
}
