//! Error handling
//!
//! Defines error types and notice mapping for the form surface.

pub mod handlers;
pub mod types;

pub use types::*;
