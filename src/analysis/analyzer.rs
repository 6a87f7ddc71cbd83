//! # Analyzer
//!
//! Pure functions computing the property set of a string.
//!
//! Character-class rules follow one convention throughout: the value is
//! lowercased, then only ASCII `[a-z0-9]` characters are considered for
//! palindrome, uniqueness and frequency. `length` and `word_count` look at
//! the value as given.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;

use super::hash::content_hash;
use super::record::{StringProperties, StringRecord};

/// Analyze a value and build a fresh record stamped with the current time
pub fn analyze(value: &str) -> StringRecord {
    let properties = analyze_properties(value);
    StringRecord {
        id: properties.sha256_hash.clone(),
        value: value.to_string(),
        properties,
        created_at: Utc::now(),
    }
}

/// Compute every property of `value`. Total over all strings.
pub fn analyze_properties(value: &str) -> StringProperties {
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: count_unique_characters(value),
        word_count: count_words(value),
        sha256_hash: content_hash(value),
        character_frequency_map: character_frequency(value),
    }
}

/// Lowercase and keep only `[a-z0-9]`
fn folded_alphanumerics(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Case-insensitive palindrome check ignoring non-alphanumerics.
///
/// A value with no alphanumerics at all (including `""`) is a palindrome.
pub fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = folded_alphanumerics(value).collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Number of whitespace-separated tokens; 0 for blank input
pub fn count_words(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Distinct lowercase alphanumeric characters
pub fn count_unique_characters(value: &str) -> usize {
    folded_alphanumerics(value).collect::<BTreeSet<_>>().len()
}

/// Occurrence count per lowercase alphanumeric character
pub fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for c in folded_alphanumerics(value) {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}
