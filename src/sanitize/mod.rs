//! Input sanitization
//!
//! Pattern-stripping for known-dangerous substrings in raw form input.

pub mod filters;

pub use filters::sanitize_input;
