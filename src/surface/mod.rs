//! Form surface
//!
//! The rendered UI surface: line-event parsing, event handling, notice
//! formatting, and the interactive session loop.

pub mod core;
pub mod events;
pub mod handlers;
pub mod notices;
pub mod theme;

pub use core::Surface;
pub use events::{Event, EventOutcome, EventStatus, parse_event};
pub use handlers::handle_event;
pub use theme::Theme;
