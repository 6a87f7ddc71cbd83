//! # Query Module
//!
//! Filtering over analyzed records: the `FilterSet` evaluator, the
//! structured query-parameter parser and the natural-language translator.

pub mod filter;
pub mod params;
pub mod translator;

pub use filter::FilterSet;
pub use translator::{translate, Translation};
