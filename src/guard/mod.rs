//! Submission guard
//!
//! Gates form submission behind field validation and a session attempt
//! limit.

pub mod limiter;
pub mod submit;

pub use limiter::AttemptLimiter;
pub use submit::{GuardState, SubmissionGuard, SubmitOutcome};
