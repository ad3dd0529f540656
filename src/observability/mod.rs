//! Observability for the library service
//!
//! Structured JSON logging with typed events.
//!
//! # Usage
//!
//! ```ignore
//! use library_rest::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::AuthorAddedToBook, &[("author_id", "5"), ("name", "Ann")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
