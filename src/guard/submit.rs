//! Submission state machine
//!
//! Drives a submit request through rate limiting and validation into the
//! simulated submitting state. The guard owns no timers; the surface
//! completes an accepted submission after the configured delay.

use log::{info, warn};

use crate::error::RateLimitError;
use crate::form::FormState;
use crate::guard::limiter::AttemptLimiter;

/// Lifecycle state of the submission guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Submitting,
}

/// Outcome of a submit request.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// All fields passed; the attempt was counted and the guard entered
    /// `Submitting`.
    Accepted { attempt: u32 },
    /// One or more fields failed validation; errors were recorded on the
    /// form and no attempt was counted.
    Rejected,
    /// The session attempt limit was reached; no attempt was counted.
    RateLimited(RateLimitError),
    /// A submission is already underway; the request was ignored.
    InFlight,
}

/// Gates submissions: rate limit first, then field validation.
pub struct SubmissionGuard {
    state: GuardState,
    limiter: AttemptLimiter,
}

impl SubmissionGuard {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            state: GuardState::Idle,
            limiter: AttemptLimiter::new(max_attempts),
        }
    }

    /// Runs a submit request against the current form state.
    ///
    /// The rate limit is checked before validation, so an exhausted session
    /// reports the limit even while fields are invalid.
    pub fn submit(&mut self, form: &mut FormState) -> SubmitOutcome {
        if self.state == GuardState::Submitting {
            return SubmitOutcome::InFlight;
        }

        if !self.limiter.is_allowed() {
            warn!(
                "Submission refused: attempt limit reached ({}/{})",
                self.limiter.attempts(),
                self.limiter.max_attempts()
            );
            return SubmitOutcome::RateLimited(RateLimitError::TooManyAttempts(
                self.limiter.attempts(),
            ));
        }

        if !form.validate_all() {
            return SubmitOutcome::Rejected;
        }

        self.limiter.record();
        self.state = GuardState::Submitting;
        info!("Submission attempt {} accepted", self.limiter.attempts());
        SubmitOutcome::Accepted {
            attempt: self.limiter.attempts(),
        }
    }

    /// Completes the in-flight submission and returns the guard to idle.
    pub fn complete(&mut self) {
        self.state = GuardState::Idle;
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == GuardState::Submitting
    }

    pub fn attempts(&self) -> u32 {
        self.limiter.attempts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;

    fn valid_form() -> FormState {
        let mut form = FormState::new(512);
        form.apply_input(Field::Email, "alice@example.com");
        form.apply_input(Field::Password, "Sup3rSecret");
        form
    }

    #[test]
    fn test_accepts_valid_form_and_counts_attempt() {
        let mut form = valid_form();
        let mut guard = SubmissionGuard::new(5);

        assert_eq!(guard.submit(&mut form), SubmitOutcome::Accepted { attempt: 1 });
        assert!(guard.is_submitting());
        assert_eq!(guard.attempts(), 1);
    }

    #[test]
    fn test_rejects_invalid_form_without_counting() {
        let mut form = FormState::new(512);
        let mut guard = SubmissionGuard::new(5);

        assert_eq!(guard.submit(&mut form), SubmitOutcome::Rejected);
        assert_eq!(guard.attempts(), 0);
        assert_eq!(guard.state(), GuardState::Idle);
        assert!(form.has_errors());
    }

    #[test]
    fn test_rate_limits_after_threshold() {
        let mut form = valid_form();
        let mut guard = SubmissionGuard::new(5);

        for attempt in 1..=5 {
            assert_eq!(guard.submit(&mut form), SubmitOutcome::Accepted { attempt });
            guard.complete();
        }

        // the sixth request is refused and the counter stays put
        assert_eq!(
            guard.submit(&mut form),
            SubmitOutcome::RateLimited(RateLimitError::TooManyAttempts(5))
        );
        assert_eq!(guard.attempts(), 5);
        assert!(!guard.is_submitting());
    }

    #[test]
    fn test_rate_limit_outranks_validation() {
        let mut form = valid_form();
        let mut guard = SubmissionGuard::new(1);
        guard.submit(&mut form);
        guard.complete();

        form.apply_input(Field::Email, "bad");
        assert!(matches!(
            guard.submit(&mut form),
            SubmitOutcome::RateLimited(_)
        ));
    }

    #[test]
    fn test_in_flight_submission_ignores_requests() {
        let mut form = valid_form();
        let mut guard = SubmissionGuard::new(5);

        guard.submit(&mut form);
        assert_eq!(guard.submit(&mut form), SubmitOutcome::InFlight);
        assert_eq!(guard.attempts(), 1);

        guard.complete();
        assert_eq!(guard.submit(&mut form), SubmitOutcome::Accepted { attempt: 2 });
    }
}
