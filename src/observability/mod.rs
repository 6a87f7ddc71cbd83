//! Observability for the string analyzer
//!
//! - Structured logging (JSON, one line per event)
//! - Typed lifecycle and request events
//! - Elapsed-time measurement for request logging
//!
//! # Usage
//!
//! ```ignore
//! use string_analyzer::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::StringCreated, &[("id", &record.id)]);
//! ```

mod events;
mod logger;
mod timer;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use timer::Timer;

/// Log a typed event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a typed event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

/// Log a typed event at an explicit severity
pub fn log_event_at(severity: Severity, event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Output goes to stdout; only checks nothing panics
        log_event(Event::ServerStart);
        log_event(Event::ServerStop);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ConfigLoaded, &[("port", "3000")]);
        log_event_at(Severity::Warn, Event::QueryRejected, &[("query", "xyz")]);
    }
}
