//! Observable events
//!
//! Events are explicit and typed; the string form is what appears in the
//! `event` key of each log line.

use std::fmt;

/// Observable events in the string analyzer service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved
    ConfigLoaded,
    /// Listener bound, accepting requests
    ServerStart,
    /// Server loop exited
    ServerStop,
    /// Server failed to bind or crashed
    ServerFailed,

    // Transport
    /// One HTTP request served
    HttpRequest,

    // Records
    /// New string analyzed and stored
    StringCreated,
    /// Create rejected because the content already exists
    StringDuplicate,
    /// String removed from the store
    StringDeleted,

    // Queries
    /// Natural-language query translated to filters
    QueryTranslated,
    /// Natural-language query could not be translated
    QueryRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",
            Event::ServerFailed => "SERVER_FAILED",
            Event::HttpRequest => "HTTP_REQUEST",
            Event::StringCreated => "STRING_CREATED",
            Event::StringDuplicate => "STRING_DUPLICATE",
            Event::StringDeleted => "STRING_DELETED",
            Event::QueryTranslated => "QUERY_TRANSLATED",
            Event::QueryRejected => "QUERY_REJECTED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::StringCreated.as_str(), "STRING_CREATED");
        assert_eq!(Event::QueryRejected.to_string(), "QUERY_REJECTED");
    }

    #[test]
    fn test_only_server_failure_is_fatal() {
        assert!(Event::ServerFailed.is_fatal());
        assert!(!Event::StringDeleted.is_fatal());
        assert!(!Event::HttpRequest.is_fatal());
    }
}
