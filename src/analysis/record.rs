//! # Record Types
//!
//! The unit of storage: an analyzed string and its properties.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structural properties computed by the analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters in the value as given
    pub length: usize,

    /// Case-insensitive palindrome check over alphanumerics
    pub is_palindrome: bool,

    /// Distinct lowercase alphanumeric characters
    pub unique_characters: usize,

    /// Whitespace-delimited tokens
    pub word_count: usize,

    /// Same value as the record id
    pub sha256_hash: String,

    /// Occurrences of each lowercase alphanumeric character
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// An analyzed string, keyed by its content hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Character count, shorthand for filters
    pub fn length(&self) -> usize {
        self.properties.length
    }

    /// Two records describe the same analysis, ignoring `created_at`
    pub fn same_analysis(&self, other: &StringRecord) -> bool {
        self.id == other.id && self.value == other.value && self.properties == other.properties
    }
}
