//! Field validation
//!
//! Handles per-field validation of sanitized form input.

pub mod rules;

pub use rules::{Field, validate_field};
