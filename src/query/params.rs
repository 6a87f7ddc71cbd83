//! # Query Parameter Parser
//!
//! Parses structured query parameters into a `FilterSet`.

use std::collections::HashMap;

use crate::errors::{StringError, StringResult};

use super::filter::FilterSet;

impl FilterSet {
    /// Parse filters from raw query parameters.
    ///
    /// Unknown keys are ignored and empty values count as absent.
    /// Flags and counts tolerate surrounding whitespace; a character
    /// filter is taken verbatim, so `contains_character=%20` selects
    /// values containing a space. `min_length > max_length` is accepted
    /// here; it simply matches nothing.
    pub fn from_query(params: &HashMap<String, String>) -> StringResult<Self> {
        let mut result = FilterSet::new();

        for (key, value) in params {
            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                "is_palindrome" => {
                    result.is_palindrome = Some(parse_bool(key, value)?);
                }
                "min_length" => {
                    result.min_length = Some(parse_count(key, value)?);
                }
                "max_length" => {
                    result.max_length = Some(parse_count(key, value)?);
                }
                "word_count" => {
                    result.word_count = Some(parse_count(key, value)?);
                }
                "contains_character" => {
                    result.contains_character = Some(parse_char(key, value)?);
                }
                _ => {}
            }
        }

        Ok(result)
    }
}

/// Parse a `true`/`false` flag
fn parse_bool(key: &str, value: &str) -> StringResult<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(StringError::InvalidFilterParameters(format!(
            "{} must be true or false, got {}",
            key, value
        ))),
    }
}

/// Parse a non-negative integer
fn parse_count(key: &str, value: &str) -> StringResult<usize> {
    value.trim().parse().map_err(|_| {
        StringError::InvalidFilterParameters(format!(
            "{} must be a non-negative integer, got {}",
            key, value
        ))
    })
}

/// Parse exactly one character
fn parse_char(key: &str, value: &str) -> StringResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(StringError::InvalidFilterParameters(format!(
            "{} must be a single character, got {}",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_full_query_params() {
        let filters = FilterSet::from_query(&params(&[
            ("is_palindrome", "true"),
            ("min_length", "3"),
            ("max_length", "10"),
            ("word_count", "1"),
            ("contains_character", "a"),
        ]))
        .unwrap();

        assert_eq!(
            filters,
            FilterSet::new()
                .with_palindrome(true)
                .with_min_length(3)
                .with_max_length(10)
                .with_word_count(1)
                .with_character('a')
        );
    }

    #[test]
    fn test_no_params_is_empty() {
        let filters = FilterSet::from_query(&HashMap::new()).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_unknown_and_empty_params_ignored() {
        let filters =
            FilterSet::from_query(&params(&[("limit", "20"), ("min_length", "")])).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_malformed_numbers_rejected() {
        for (key, value) in [("min_length", "abc"), ("max_length", "-1"), ("word_count", "1.5")] {
            let result = FilterSet::from_query(&params(&[(key, value)]));
            assert!(
                matches!(result, Err(StringError::InvalidFilterParameters(_))),
                "{}={} should be rejected",
                key,
                value
            );
        }
    }

    #[test]
    fn test_malformed_bool_rejected() {
        let result = FilterSet::from_query(&params(&[("is_palindrome", "yes")]));
        assert!(matches!(
            result,
            Err(StringError::InvalidFilterParameters(_))
        ));
    }

    #[test]
    fn test_contains_character_must_be_single() {
        assert!(FilterSet::from_query(&params(&[("contains_character", "ab")])).is_err());
        let ok = FilterSet::from_query(&params(&[("contains_character", "é")])).unwrap();
        assert_eq!(ok.contains_character, Some('é'));
    }

    #[test]
    fn test_whitespace_character_kept_verbatim() {
        let filters = FilterSet::from_query(&params(&[("contains_character", " ")])).unwrap();
        assert_eq!(filters.contains_character, Some(' '));

        let padded =
            FilterSet::from_query(&params(&[("min_length", " 4 "), ("is_palindrome", "true ")]))
                .unwrap();
        assert_eq!(
            padded,
            FilterSet::new().with_min_length(4).with_palindrome(true)
        );
    }

    #[test]
    fn test_inverted_bounds_are_not_an_error() {
        let filters =
            FilterSet::from_query(&params(&[("min_length", "9"), ("max_length", "2")])).unwrap();
        assert_eq!(filters.conflict(), Some((9, 2)));
    }
}
