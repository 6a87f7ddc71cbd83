//! # Response Formatting
//!
//! Response envelopes for the string endpoints.

use serde::Serialize;

use crate::analysis::StringRecord;
use crate::query::{FilterSet, Translation};

/// Structured listing response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

impl ListResponse {
    pub fn new(data: Vec<StringRecord>, filters_applied: FilterSet) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            filters_applied,
        }
    }
}

/// Natural-language search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: Translation,
}

impl SearchResponse {
    pub fn new(data: Vec<StringRecord>, interpreted_query: Translation) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            interpreted_query,
        }
    }
}
