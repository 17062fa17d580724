//! Error handlers
//!
//! Central logging and notice mapping for form errors.

use log::error;

use crate::error::types::FormError;

/// Handle a form error
pub fn handle_error(err: &FormError) {
    error!("Form error: {}", err);
}

/// Convert an error to the notice rendered on the surface
pub fn error_to_notice(err: &FormError) -> String {
    match err {
        FormError::Validation(e) => e.message().to_string(),
        FormError::RateLimit(e) => e.message().to_string(),
        FormError::Config(e) => format!("Configuration problem: {}", e),
        FormError::Io(_) => "Input could not be read".to_string(),
    }
}
