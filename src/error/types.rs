//! Error types
//!
//! Defines domain-specific error types for each module of the form core.

use std::fmt;
use std::io;

use ::config::ConfigError;

use crate::validation::Field;

/// Per-field validation errors, shown inline next to the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
    PasswordComposition,
}

impl ValidationError {
    /// Field this error is attached to
    pub fn field(&self) -> Field {
        match self {
            ValidationError::EmailRequired | ValidationError::EmailInvalid => Field::Email,
            ValidationError::PasswordRequired
            | ValidationError::PasswordTooShort
            | ValidationError::PasswordComposition => Field::Password,
        }
    }

    /// Inline message rendered under the field
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmailRequired => "Email is required",
            ValidationError::EmailInvalid => "Please enter a valid email",
            ValidationError::PasswordRequired => "Password is required",
            ValidationError::PasswordTooShort => "Password must be at least 8 characters",
            ValidationError::PasswordComposition => {
                "Password must contain uppercase, lowercase, and number"
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field(), self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Submission rate limiting errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitError {
    TooManyAttempts(u32),
}

impl RateLimitError {
    /// Blocking alert rendered on the surface
    pub fn message(&self) -> &'static str {
        match self {
            RateLimitError::TooManyAttempts(_) => {
                "Too many login attempts. Please try again later."
            }
        }
    }
}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateLimitError::TooManyAttempts(n) => {
                write!(f, "Too many submit attempts: {}", n)
            }
        }
    }
}

impl std::error::Error for RateLimitError {}

/// General form error that encompasses all error types
#[derive(Debug)]
pub enum FormError {
    Validation(ValidationError),
    RateLimit(RateLimitError),
    Config(ConfigError),
    Io(io::Error),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Validation(e) => write!(f, "Validation error: {}", e),
            FormError::RateLimit(e) => write!(f, "Rate limit error: {}", e),
            FormError::Config(e) => write!(f, "Configuration error: {}", e),
            FormError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FormError {}

// Implement conversions from specific errors to FormError
impl From<ValidationError> for FormError {
    fn from(error: ValidationError) -> Self {
        FormError::Validation(error)
    }
}

impl From<RateLimitError> for FormError {
    fn from(error: RateLimitError) -> Self {
        FormError::RateLimit(error)
    }
}

impl From<ConfigError> for FormError {
    fn from(error: ConfigError) -> Self {
        FormError::Config(error)
    }
}

impl From<io::Error> for FormError {
    fn from(error: io::Error) -> Self {
        FormError::Io(error)
    }
}
