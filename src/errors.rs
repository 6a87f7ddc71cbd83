//! # Core Errors
//!
//! Error type shared by the analyzer, the record store, the filter parser
//! and the natural-language translator. None of these are transport
//! aware; the HTTP layer maps them to status codes.

use thiserror::Error;

/// Result type for core operations
pub type StringResult<T> = Result<T, StringError>;

/// Core string-analysis errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringError {
    /// Input was missing or not usable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record with the same content hash already exists
    #[error("String already exists: {0}")]
    DuplicateRecord(String),

    /// Lookup or delete miss
    #[error("String not found")]
    NotFound,

    /// A structured filter parameter could not be parsed
    #[error("Invalid filter parameter: {0}")]
    InvalidFilterParameters(String),

    /// No natural-language rule matched the query
    #[error("Unable to parse natural language query: {0}")]
    UntranslatableQuery(String),

    /// A single bound in the query can never be met
    #[error("Query matches no string: {0}")]
    UnsatisfiableQuery(String),

    /// Translated filters can never be satisfied
    #[error("Conflicting filters: min_length {min_length} > max_length {max_length}")]
    ConflictingFilters {
        min_length: usize,
        max_length: usize,
    },

    /// Store lock poisoned or similar
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StringError {
    /// Stable machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            StringError::InvalidInput(_) => "INVALID_INPUT",
            StringError::DuplicateRecord(_) => "DUPLICATE_RECORD",
            StringError::NotFound => "NOT_FOUND",
            StringError::InvalidFilterParameters(_) => "INVALID_FILTER_PARAMETERS",
            StringError::UntranslatableQuery(_) => "UNTRANSLATABLE_QUERY",
            StringError::UnsatisfiableQuery(_) => "UNSATISFIABLE_QUERY",
            StringError::ConflictingFilters { .. } => "CONFLICTING_FILTERS",
            StringError::Internal(_) => "INTERNAL",
        }
    }

    pub(crate) fn lock_poisoned() -> Self {
        StringError::Internal("Lock poisoned".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message() {
        let err = StringError::ConflictingFilters {
            min_length: 11,
            max_length: 4,
        };
        assert_eq!(
            err.to_string(),
            "Conflicting filters: min_length 11 > max_length 4"
        );
        assert_eq!(err.code(), "CONFLICTING_FILTERS");
    }

    #[test]
    fn test_lock_poisoned_is_internal() {
        assert!(matches!(
            StringError::lock_poisoned(),
            StringError::Internal(_)
        ));
    }
}
