//! Analysis Property Tests
//!
//! Invariants the analyzer must hold for every input:
//! - id is a pure function of the value
//! - word_count is 0 iff the trimmed value is empty
//! - frequency keys are lowercase ASCII alphanumerics
//! - frequencies sum to the alphanumeric count of the folded value
//! - unique_characters equals the number of frequency keys

use string_analyzer::analysis::{analyze, analyze_properties, content_hash};

const SAMPLES: &[&str] = &[
    "",
    " ",
    "\t\n",
    "racecar",
    "Madam, I'm Adam",
    "hello",
    "a b  c",
    "AAbb1!",
    "Ünïcödé strings — with dashes",
    "12321",
    "The quick brown fox jumps over the lazy dog",
    "emoji 🎉 party 🎉",
];

fn folded_alphanumeric_count(value: &str) -> usize {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .count()
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_identity_is_deterministic() {
    for value in SAMPLES {
        let first = analyze(value);
        let second = analyze(value);
        assert_eq!(first.id, second.id);
        assert_eq!(first.properties, second.properties);
        assert_eq!(first.id, content_hash(value));
    }
}

#[test]
fn test_distinct_values_distinct_ids() {
    let mut ids: Vec<String> = SAMPLES.iter().map(|v| analyze(v).id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), SAMPLES.len());
}

// =============================================================================
// Property invariants
// =============================================================================

#[test]
fn test_word_count_zero_iff_blank() {
    for value in SAMPLES {
        let props = analyze_properties(value);
        assert_eq!(
            props.word_count == 0,
            value.trim().is_empty(),
            "word_count invariant for {:?}",
            value
        );
    }
}

#[test]
fn test_frequency_map_invariants() {
    for value in SAMPLES {
        let props = analyze_properties(value);
        let freq = &props.character_frequency_map;

        assert!(freq
            .keys()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(freq.values().sum::<usize>(), folded_alphanumeric_count(value));
        assert_eq!(props.unique_characters, freq.len());
    }
}

#[test]
fn test_documented_examples() {
    assert!(analyze_properties("Madam, I'm Adam").is_palindrome);
    assert!(!analyze_properties("hello").is_palindrome);
    assert!(analyze_properties("").is_palindrome);

    assert_eq!(analyze_properties("  ").word_count, 0);
    assert_eq!(analyze_properties("a b  c").word_count, 3);

    let freq = analyze_properties("AAbb1!").character_frequency_map;
    assert_eq!(freq.len(), 3);
    assert_eq!(freq[&'a'], 2);
    assert_eq!(freq[&'b'], 2);
    assert_eq!(freq[&'1'], 1);
}

#[test]
fn test_length_is_not_normalized() {
    assert_eq!(analyze_properties("  padded  ").length, 10);
    assert_eq!(analyze_properties("🎉").length, 1);
}
