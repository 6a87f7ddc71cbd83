//! # Filter Evaluator
//!
//! A `FilterSet` is a conjunction of optional constraints over a record.
//! Both structured queries and translated natural-language queries end up
//! here, so the two paths share the same matching semantics.

use serde::{Deserialize, Serialize};

use crate::analysis::StringRecord;

/// A set of optional constraints combined with AND logic.
///
/// Absent fields impose no constraint; an empty set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = Some(word_count);
        self
    }

    pub fn with_character(mut self, c: char) -> Self {
        self.contains_character = Some(c);
        self
    }

    /// True if no constraint is set
    pub fn is_empty(&self) -> bool {
        self == &FilterSet::default()
    }

    /// `(min, max)` when both bounds are set and `min > max`
    pub fn conflict(&self) -> Option<(usize, usize)> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Some((min, max)),
            _ => None,
        }
    }

    /// Check if a record satisfies every present constraint
    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;

        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            if !contains_ignore_case(&record.value, c) {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: char) -> bool {
    let needle: String = needle.to_lowercase().collect();
    haystack.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_empty_set_matches_everything() {
        let filters = FilterSet::new();
        assert!(filters.is_empty());
        assert!(filters.matches(&analyze("")));
        assert!(filters.matches(&analyze("anything goes")));
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let record = analyze("abcde");

        assert!(FilterSet::new()
            .with_min_length(5)
            .with_max_length(5)
            .matches(&record));
        assert!(!FilterSet::new().with_min_length(6).matches(&record));
        assert!(!FilterSet::new().with_max_length(4).matches(&record));
    }

    #[test]
    fn test_palindrome_filter() {
        let filters = FilterSet::new().with_palindrome(true);
        assert!(filters.matches(&analyze("Racecar")));
        assert!(!filters.matches(&analyze("racecars")));

        let not_palindromes = FilterSet::new().with_palindrome(false);
        assert!(not_palindromes.matches(&analyze("racecars")));
    }

    #[test]
    fn test_word_count_filter() {
        let filters = FilterSet::new().with_word_count(1);
        assert!(filters.matches(&analyze("  solo  ")));
        assert!(!filters.matches(&analyze("two words")));
        assert!(!filters.matches(&analyze("   ")));
    }

    #[test]
    fn test_contains_character_case_insensitive() {
        let lower = FilterSet::new().with_character('z');
        let upper = FilterSet::new().with_character('Z');
        let record = analyze("Zebra");

        assert!(lower.matches(&record));
        assert!(upper.matches(&record));
        assert!(!lower.matches(&analyze("horse")));
    }

    #[test]
    fn test_all_constraints_must_hold() {
        let filters = FilterSet::new()
            .with_palindrome(true)
            .with_min_length(4)
            .with_character('e');

        assert!(filters.matches(&analyze("level")));
        assert!(!filters.matches(&analyze("eve")));
        assert!(!filters.matches(&analyze("noon")));
    }

    #[test]
    fn test_conflict_detection() {
        assert_eq!(
            FilterSet::new()
                .with_min_length(11)
                .with_max_length(4)
                .conflict(),
            Some((11, 4))
        );
        assert_eq!(
            FilterSet::new()
                .with_min_length(4)
                .with_max_length(4)
                .conflict(),
            None
        );
        assert_eq!(FilterSet::new().with_min_length(9).conflict(), None);
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let filters = FilterSet::new().with_palindrome(true).with_min_length(6);
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json, serde_json::json!({"is_palindrome": true, "min_length": 6}));
    }
}
