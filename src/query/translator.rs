//! # Natural-Language Translator
//!
//! Maps a free-text query such as "palindromic strings longer than 5" to
//! a `FilterSet`.
//!
//! The translator is an ordered list of independent rules evaluated over
//! the lowercased query. Each rule may set one filter field; later rules
//! overwrite earlier ones on the same field. Nothing is guessed: if no
//! rule fires the query is rejected.
//!
//! | Rule              | Trigger                                 | Filter                      |
//! |-------------------|-----------------------------------------|-----------------------------|
//! | `palindrome`      | "palindrome" / "palindromic"            | `is_palindrome = true`      |
//! | `single_word`     | "single word"                           | `word_count = 1`            |
//! | `longer_than`     | "longer than N"                         | `min_length = N + 1`        |
//! | `shorter_than`    | "shorter than N" (N >= 1)               | `max_length = N - 1`        |
//! | `contains_letter` | "contain(ing) (the letter) X"           | `contains_character = X`    |
//! | `first_vowel`     | "first vowel"                           | `contains_character = 'a'`  |
//!
//! "shorter than 0" can match nothing and is rejected as unsatisfiable.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::errors::{StringError, StringResult};

use super::filter::FilterSet;

/// Result of a successful translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// The query as received
    pub original: String,

    /// Filters produced by the matched rules
    #[serde(rename = "parsed_filters")]
    pub filters: FilterSet,

    /// Names of the rules that fired, in evaluation order
    pub matched_rules: Vec<&'static str>,
}

/// A rule inspects the lowercased query and may set filter fields.
/// Returns true if it fired.
type RuleFn = fn(&str, &mut FilterSet) -> StringResult<bool>;

/// Evaluation order matters: `first_vowel` must follow `contains_letter`.
const RULES: &[(&str, RuleFn)] = &[
    ("palindrome", palindrome_rule),
    ("single_word", single_word_rule),
    ("longer_than", longer_than_rule),
    ("shorter_than", shorter_than_rule),
    ("contains_letter", contains_letter_rule),
    ("first_vowel", first_vowel_rule),
];

/// Translate a natural-language query into filters
pub fn translate(query: &str) -> StringResult<Translation> {
    if query.trim().is_empty() {
        return Err(StringError::InvalidInput(
            "query must not be empty".to_string(),
        ));
    }

    let lower = query.to_lowercase();
    let mut filters = FilterSet::new();
    let mut matched_rules = Vec::new();

    for (name, rule) in RULES {
        if rule(&lower, &mut filters)? {
            matched_rules.push(*name);
        }
    }

    if matched_rules.is_empty() {
        return Err(StringError::UntranslatableQuery(query.to_string()));
    }

    if let Some((min_length, max_length)) = filters.conflict() {
        return Err(StringError::ConflictingFilters {
            min_length,
            max_length,
        });
    }

    Ok(Translation {
        original: query.to_string(),
        filters,
        matched_rules,
    })
}

fn palindrome_rule(query: &str, filters: &mut FilterSet) -> StringResult<bool> {
    if query.contains("palindrome") || query.contains("palindromic") {
        filters.is_palindrome = Some(true);
        return Ok(true);
    }
    Ok(false)
}

fn single_word_rule(query: &str, filters: &mut FilterSet) -> StringResult<bool> {
    if query.contains("single word") {
        filters.word_count = Some(1);
        return Ok(true);
    }
    Ok(false)
}

fn longer_than_rule(query: &str, filters: &mut FilterSet) -> StringResult<bool> {
    match capture_number(longer_than_pattern(), query) {
        Some(n) => {
            filters.min_length = Some(n.saturating_add(1));
            Ok(true)
        }
        None => Ok(false),
    }
}

fn shorter_than_rule(query: &str, filters: &mut FilterSet) -> StringResult<bool> {
    match capture_number(shorter_than_pattern(), query) {
        Some(0) => Err(StringError::UnsatisfiableQuery(
            "no string is shorter than 0 characters".to_string(),
        )),
        Some(n) => {
            filters.max_length = Some(n - 1);
            Ok(true)
        }
        None => Ok(false),
    }
}

fn contains_letter_rule(query: &str, filters: &mut FilterSet) -> StringResult<bool> {
    let c = contains_pattern()
        .captures(query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next());

    match c {
        Some(c) => {
            filters.contains_character = Some(c);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Fixed placeholder: always the letter 'a', never the query's own vowel
fn first_vowel_rule(query: &str, filters: &mut FilterSet) -> StringResult<bool> {
    if query.contains("first vowel") {
        filters.contains_character = Some('a');
        return Ok(true);
    }
    Ok(false)
}

/// First capture group parsed as a count; overflowing digits saturate
fn capture_number(pattern: &Regex, query: &str) -> Option<usize> {
    let digits = pattern.captures(query)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(usize::MAX))
}

static LONGER_THAN: OnceLock<Regex> = OnceLock::new();
static SHORTER_THAN: OnceLock<Regex> = OnceLock::new();
static CONTAINS: OnceLock<Regex> = OnceLock::new();

// Patterns below are literals; compilation cannot fail.

fn longer_than_pattern() -> &'static Regex {
    LONGER_THAN.get_or_init(|| Regex::new(r"longer than ([0-9]+)").expect("valid regex"))
}

fn shorter_than_pattern() -> &'static Regex {
    SHORTER_THAN.get_or_init(|| Regex::new(r"shorter than ([0-9]+)").expect("valid regex"))
}

fn contains_pattern() -> &'static Regex {
    CONTAINS.get_or_init(|| {
        Regex::new(r"contain(?:ing)?(?: the letter)? ([a-z0-9_])").expect("valid regex")
    })
}
