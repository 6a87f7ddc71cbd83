//! # String Analysis
//!
//! Computes the structural properties of a string and derives its
//! content identifier.
//!
//! Analysis is pure: no I/O, no shared state. The same input always
//! produces the same properties and the same id; only `created_at`
//! differs between two analyses.

pub mod analyzer;
pub mod hash;
pub mod record;

pub use analyzer::{
    analyze, analyze_properties, character_frequency, count_unique_characters, count_words,
    is_palindrome,
};
pub use hash::content_hash;
pub use record::{StringProperties, StringRecord};
