//! Form state management
//!
//! Tracks field values, per-field errors, and the login/sign-up mode.

pub mod state;

pub use state::{FormMode, FormState};
