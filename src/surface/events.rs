//! Module `events`
//!
//! Defines the line events accepted by the form surface and the parsing
//! logic that turns raw input lines into them, plus the outcome types
//! returned by event handlers.

use crate::validation::Field;

/// An event on the form surface, parsed from one input line.
///
/// Field edits carry the text exactly as typed; sanitization happens when
/// the edit is applied to the form.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Edit a field; an empty argument clears it
    Input(Field, String),
    /// Request submission of the form
    Submit,
    /// Toggle between the login and sign-up flows
    ToggleMode,
    /// Toggle the dark/light render hint
    ToggleTheme,
    /// Show the fact currently on display
    ShowFact,
    /// Close the surface
    Quit,
    /// Anything unrecognized
    Unknown,
}

impl Event {
    /// Keyword used in logs. Field edit values are deliberately not logged.
    pub fn label(&self) -> &'static str {
        match self {
            Event::Input(Field::Email, _) => "EMAIL",
            Event::Input(Field::Password, _) => "PASSWORD",
            Event::Submit => "SUBMIT",
            Event::ToggleMode => "MODE",
            Event::ToggleTheme => "THEME",
            Event::ShowFact => "FACT",
            Event::Quit => "QUIT",
            Event::Unknown => "UNKNOWN",
        }
    }
}

/// Represents the outcome status of handling an event.
pub enum EventStatus {
    Success,
    Failure(String),
    CloseSurface,
}

/// Struct encapsulating the full result of handling an event.
pub struct EventOutcome {
    pub status: EventStatus,
    pub notice: Option<String>,
}

/// Parses a raw input line into an `Event`.
pub fn parse_event(raw: &str) -> Event {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let keyword = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match keyword.as_str() {
        "EMAIL" => Event::Input(Field::Email, arg.to_string()),
        "PASSWORD" => Event::Input(Field::Password, arg.to_string()),
        "SUBMIT" => Event::Submit,
        "MODE" => Event::ToggleMode,
        "THEME" => Event::ToggleTheme,
        "FACT" => Event::ShowFact,
        "QUIT" | "Q" => Event::Quit,
        _ => Event::Unknown,
    }
}
