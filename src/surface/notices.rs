//! Surface notices
//!
//! Formats the lines rendered back to the user.

use crate::error::{RateLimitError, ValidationError};
use crate::form::FormMode;
use crate::surface::theme::Theme;
use crate::validation::Field;

/// Inline error rendered under a field
pub fn inline_error(err: &ValidationError) -> String {
    format!("{}: {}", err.field(), err.message())
}

/// Confirmation that a field edit was accepted
pub fn field_ok(field: Field) -> String {
    format!("{}: ok", field)
}

/// Blocking rate limit alert
pub fn rate_limit_alert(err: &RateLimitError) -> String {
    err.message().to_string()
}

/// Spinner line shown while the simulated submission runs
pub fn submitting(mode: FormMode) -> String {
    match mode {
        FormMode::Login => "Signing In...".to_string(),
        FormMode::SignUp => "Creating Account...".to_string(),
    }
}

/// Simulated success alert
pub fn success(mode: FormMode) -> String {
    format!("{} successful! (Demo)", mode.label())
}

/// Heading pair for the current form mode
pub fn mode_banner(mode: FormMode) -> String {
    match mode {
        FormMode::Login => "Welcome Back - Sign in to your account to continue".to_string(),
        FormMode::SignUp => "Create Account - Join us to get started".to_string(),
    }
}

/// Theme switch confirmation
pub fn theme_switched(theme: Theme) -> String {
    format!("Theme switched to {}", theme.name())
}

/// Rotating fact panel line
pub fn fact_line(fact: &str) -> String {
    format!("Did you know? {}", fact)
}

/// Hint listing the accepted events
pub fn event_hint() -> String {
    "Events: EMAIL <text>, PASSWORD <text>, SUBMIT, MODE, THEME, FACT, QUIT".to_string()
}
