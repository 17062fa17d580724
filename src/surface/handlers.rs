//! Event handlers module for the form surface.
//!
//! This module defines handler functions for surface events, covering
//! field edits, submission, the mode and theme toggles, and session
//! control.

use log::info;

use crate::form::FormState;
use crate::guard::{SubmissionGuard, SubmitOutcome};
use crate::rotator::FactRotator;
use crate::surface::events::{Event, EventOutcome, EventStatus};
use crate::surface::notices;
use crate::surface::theme::Theme;
use crate::validation::Field;

/// Dispatches a parsed event to its corresponding handler.
///
/// # Arguments
///
/// * `event` - Reference to the parsed surface event.
/// * `form` - Mutable reference to the form state.
/// * `guard` - Mutable reference to the submission guard.
/// * `rotator` - Mutable reference to the fact rotator.
/// * `theme` - Mutable reference to the theme toggle.
///
/// # Returns
///
/// * `EventOutcome` - Result of handling the event, including status and
///   the notice to render.
pub fn handle_event(
    event: &Event,
    form: &mut FormState,
    guard: &mut SubmissionGuard,
    rotator: &mut FactRotator,
    theme: &mut Theme,
) -> EventOutcome {
    match event {
        Event::Input(field, raw) => handle_field_input(form, *field, raw),
        Event::Submit => handle_submit(form, guard),
        Event::ToggleMode => handle_toggle_mode(form),
        Event::ToggleTheme => handle_toggle_theme(theme),
        Event::ShowFact => handle_show_fact(rotator),
        Event::Quit => handle_quit(),
        Event::Unknown => handle_unknown(),
    }
}

/// Handles a field edit: applies the input and reports the inline result.
fn handle_field_input(form: &mut FormState, field: Field, raw: &str) -> EventOutcome {
    match form.apply_input(field, raw) {
        Some(err) => EventOutcome {
            status: EventStatus::Failure(err.message().to_string()),
            notice: Some(notices::inline_error(err)),
        },
        None => EventOutcome {
            status: EventStatus::Success,
            notice: Some(notices::field_ok(field)),
        },
    }
}

/// Handles a submit request through the guard.
///
/// An accepted submission leaves the guard in `Submitting`; the surface
/// loop schedules the deferred completion.
fn handle_submit(form: &mut FormState, guard: &mut SubmissionGuard) -> EventOutcome {
    match guard.submit(form) {
        SubmitOutcome::Accepted { attempt } => {
            info!("Submission {} in flight", attempt);
            EventOutcome {
                status: EventStatus::Success,
                notice: Some(notices::submitting(form.mode())),
            }
        }
        SubmitOutcome::Rejected => {
            let lines: Vec<String> = Field::ALL
                .iter()
                .filter_map(|field| form.error(*field))
                .map(notices::inline_error)
                .collect();
            EventOutcome {
                status: EventStatus::Failure("validation failed".into()),
                notice: Some(lines.join("\n")),
            }
        }
        SubmitOutcome::RateLimited(e) => EventOutcome {
            status: EventStatus::Failure(e.to_string()),
            notice: Some(notices::rate_limit_alert(&e)),
        },
        SubmitOutcome::InFlight => EventOutcome {
            status: EventStatus::Failure("submission in progress".into()),
            notice: Some("Submission already in progress".into()),
        },
    }
}

/// Handles the MODE event: toggles login/sign-up and reports the banner.
fn handle_toggle_mode(form: &mut FormState) -> EventOutcome {
    let mode = form.toggle_mode();
    EventOutcome {
        status: EventStatus::Success,
        notice: Some(notices::mode_banner(mode)),
    }
}

/// Handles the THEME event: toggles the render hint.
fn handle_toggle_theme(theme: &mut Theme) -> EventOutcome {
    let theme = theme.toggle();
    EventOutcome {
        status: EventStatus::Success,
        notice: Some(notices::theme_switched(theme)),
    }
}

/// Handles the FACT event: shows the fact currently on display.
fn handle_show_fact(rotator: &mut FactRotator) -> EventOutcome {
    EventOutcome {
        status: EventStatus::Success,
        notice: Some(notices::fact_line(rotator.current_fact())),
    }
}

/// Handles the QUIT event: signals the surface to close.
fn handle_quit() -> EventOutcome {
    EventOutcome {
        status: EventStatus::CloseSurface,
        notice: Some("Goodbye".into()),
    }
}

fn handle_unknown() -> EventOutcome {
    EventOutcome {
        status: EventStatus::Failure("unknown event".into()),
        notice: Some(notices::event_hint()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::events::parse_event;

    struct Fixture {
        form: FormState,
        guard: SubmissionGuard,
        rotator: FactRotator,
        theme: Theme,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                form: FormState::new(512),
                guard: SubmissionGuard::new(5),
                rotator: FactRotator::default(),
                theme: Theme::default(),
            }
        }

        fn handle(&mut self, line: &str) -> EventOutcome {
            let event = parse_event(line);
            handle_event(
                &event,
                &mut self.form,
                &mut self.guard,
                &mut self.rotator,
                &mut self.theme,
            )
        }
    }

    #[test]
    fn test_field_edit_reports_inline_errors() {
        let mut fx = Fixture::new();
        let outcome = fx.handle("EMAIL bad");
        assert!(matches!(outcome.status, EventStatus::Failure(_)));
        assert_eq!(
            outcome.notice.as_deref(),
            Some("email: Please enter a valid email")
        );

        let outcome = fx.handle("EMAIL a@b.co");
        assert!(matches!(outcome.status, EventStatus::Success));
        assert_eq!(outcome.notice.as_deref(), Some("email: ok"));
    }

    #[test]
    fn test_submit_with_empty_form_lists_every_error() {
        let mut fx = Fixture::new();
        let outcome = fx.handle("SUBMIT");
        assert!(matches!(outcome.status, EventStatus::Failure(_)));
        let notice = outcome.notice.unwrap();
        assert!(notice.contains("Email is required"));
        assert!(notice.contains("Password is required"));
        assert_eq!(fx.guard.attempts(), 0);
    }

    #[test]
    fn test_submit_success_path() {
        let mut fx = Fixture::new();
        fx.handle("EMAIL alice@example.com");
        fx.handle("PASSWORD Sup3rSecret");

        let outcome = fx.handle("SUBMIT");
        assert!(matches!(outcome.status, EventStatus::Success));
        assert_eq!(outcome.notice.as_deref(), Some("Signing In..."));
        assert!(fx.guard.is_submitting());
    }

    #[test]
    fn test_submit_rate_limit_alert() {
        let mut fx = Fixture::new();
        fx.handle("EMAIL alice@example.com");
        fx.handle("PASSWORD Sup3rSecret");
        for _ in 0..5 {
            fx.handle("SUBMIT");
            fx.guard.complete();
        }

        let outcome = fx.handle("SUBMIT");
        assert!(matches!(outcome.status, EventStatus::Failure(_)));
        assert_eq!(
            outcome.notice.as_deref(),
            Some("Too many login attempts. Please try again later.")
        );
    }

    #[test]
    fn test_mode_toggle_changes_submit_notice() {
        let mut fx = Fixture::new();
        fx.handle("EMAIL alice@example.com");
        fx.handle("PASSWORD Sup3rSecret");
        fx.handle("MODE");

        let outcome = fx.handle("SUBMIT");
        assert_eq!(outcome.notice.as_deref(), Some("Creating Account..."));
    }

    #[test]
    fn test_quit_closes_surface() {
        let mut fx = Fixture::new();
        let outcome = fx.handle("QUIT");
        assert!(matches!(outcome.status, EventStatus::CloseSurface));
    }

    #[test]
    fn test_unknown_event_hints() {
        let mut fx = Fixture::new();
        let outcome = fx.handle("BOGUS");
        assert!(matches!(outcome.status, EventStatus::Failure(_)));
        assert!(outcome.notice.unwrap().starts_with("Events:"));
    }
}
