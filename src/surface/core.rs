//! Surface session loop
//!
//! Runs the interactive form session on stdin/stdout using the Tokio
//! runtime: reads line events, rotates the fact panel on a fixed interval,
//! and completes accepted submissions after the configured delay.

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time;

use crate::config::FormConfig;
use crate::error::FormError;
use crate::error::handlers::{error_to_notice, handle_error};
use crate::form::FormState;
use crate::guard::SubmissionGuard;
use crate::rotator::FactRotator;
use crate::surface::events::{EventStatus, parse_event};
use crate::surface::handlers::handle_event;
use crate::surface::notices;
use crate::surface::theme::Theme;

/// Interactive form surface bound to stdin/stdout.
///
/// Owns all session state: the form, the submission guard, the fact
/// rotator, and the theme toggle. A single event loop drives everything,
/// so no locking is needed.
pub struct Surface {
    config: FormConfig,
    form: FormState,
    guard: SubmissionGuard,
    rotator: FactRotator,
    theme: Theme,
}

impl Surface {
    pub fn new(config: FormConfig) -> Self {
        let form = FormState::new(config.max_field_length);
        let guard = SubmissionGuard::new(config.max_attempts);

        Self {
            config,
            form,
            guard,
            rotator: FactRotator::default(),
            theme: Theme::default(),
        }
    }

    /// Runs the session until QUIT or end of input.
    pub async fn run(&mut self) {
        info!(
            "Form surface ready (max {} attempts, {}ms submit delay)",
            self.config.max_attempts, self.config.submit_delay_ms
        );

        println!("{}", notices::mode_banner(self.form.mode()));
        println!("{}", notices::event_hint());
        println!("{}", notices::fact_line(self.rotator.current_fact()));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let mut ticker = time::interval(self.config.fact_interval());
        // the first tick completes immediately; consume it so the panel
        // advances one full interval after the initial render
        ticker.tick().await;

        let (done_tx, mut done_rx) = mpsc::channel::<()>(1);

        loop {
            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        if self.dispatch_line(&line, &done_tx) {
                            break;
                        }
                    }
                    Ok(None) => {
                        info!("Input closed, leaving form surface");
                        break;
                    }
                    Err(e) => {
                        let err = FormError::Io(e);
                        handle_error(&err);
                        println!("{}", error_to_notice(&err));
                        break;
                    }
                },
                _ = ticker.tick() => {
                    println!("{}", notices::fact_line(self.rotator.advance()));
                }
                Some(()) = done_rx.recv() => {
                    self.guard.complete();
                    println!("{}", notices::success(self.form.mode()));
                    info!("Simulated submission {} completed", self.guard.attempts());
                }
            }
        }
    }

    /// Parses and handles one input line. Returns true when the surface
    /// should close.
    fn dispatch_line(&mut self, line: &str, done_tx: &mpsc::Sender<()>) -> bool {
        let event = parse_event(line);
        info!("Event received: {}", event.label());

        let was_submitting = self.guard.is_submitting();
        let outcome = handle_event(
            &event,
            &mut self.form,
            &mut self.guard,
            &mut self.rotator,
            &mut self.theme,
        );

        // a freshly accepted submission needs its deferred completion
        if !was_submitting && self.guard.is_submitting() {
            let delay = self.config.submit_delay();
            let done_tx = done_tx.clone();
            tokio::spawn(async move {
                time::sleep(delay).await;
                let _ = done_tx.send(()).await;
            });
        }

        match outcome.status {
            EventStatus::CloseSurface => {
                if let Some(notice) = outcome.notice {
                    println!("{}", notice);
                }
                true
            }
            EventStatus::Success => {
                if let Some(notice) = outcome.notice {
                    println!("{}", notice);
                }
                false
            }
            EventStatus::Failure(reason) => {
                warn!("Event {} failed: {}", event.label(), reason);
                if let Some(notice) = outcome.notice {
                    println!("{}", notice);
                }
                false
            }
        }
    }
}
