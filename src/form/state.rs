//! Module `state`
//!
//! Defines the `FormState` struct holding the current field values and
//! validation errors for the form. Values are stored sanitized; errors are
//! recomputed on every input event and on submit. There is no reset; state
//! lives for the whole session.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::sanitize::sanitize_input;
use crate::validation::{Field, validate_field};

/// Which flow the form is presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Login,
    SignUp,
}

impl FormMode {
    /// Label used in surface notices.
    pub fn label(&self) -> &'static str {
        match self {
            FormMode::Login => "Login",
            FormMode::SignUp => "Sign Up",
        }
    }
}

/// Represents the state of the login/sign-up form.
pub struct FormState {
    values: HashMap<Field, String>,
    errors: HashMap<Field, ValidationError>,
    mode: FormMode,
    max_field_length: usize,
}

impl FormState {
    pub fn new(max_field_length: usize) -> Self {
        let mut values = HashMap::new();
        for field in Field::ALL {
            values.insert(field, String::new());
        }

        Self {
            values,
            errors: HashMap::new(),
            mode: FormMode::default(),
            max_field_length,
        }
    }

    /// Applies a raw input event to a field: caps the length, sanitizes,
    /// stores, and re-validates. Returns the field's new error, if any.
    pub fn apply_input(&mut self, field: Field, raw: &str) -> Option<&ValidationError> {
        let capped: String = raw.chars().take(self.max_field_length).collect();
        let sanitized = sanitize_input(&capped);

        match validate_field(field, &sanitized) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }

        self.values.insert(field, sanitized);
        self.error(field)
    }

    /// Re-validates every field, replacing the error map. Returns true when
    /// the form is clean.
    pub fn validate_all(&mut self) -> bool {
        self.errors.clear();
        for field in Field::ALL {
            if let Err(e) = validate_field(field, self.value(field)) {
                self.errors.insert(field, e);
            }
        }
        self.errors.is_empty()
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns the stored (sanitized) value of a field.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Returns the current error of a field, if any.
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Returns whether any field currently has an error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the current form mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    // --------------------
    // Setter methods
    // --------------------

    /// Toggles between the login and sign-up flows, returning the new mode.
    pub fn toggle_mode(&mut self) -> FormMode {
        self.mode = match self.mode {
            FormMode::Login => FormMode::SignUp,
            FormMode::SignUp => FormMode::Login,
        };
        self.mode
    }
}
