//! # String Service
//!
//! The operations the transport layer calls: create, get, list, search
//! and delete. Identity is always the content hash of the literal value,
//! and every filter, structured or translated, goes through
//! `FilterSet::matches`.

use std::sync::Arc;

use crate::analysis::{analyze, content_hash, StringRecord};
use crate::errors::{StringError, StringResult};
use crate::observability::{log_event_at, log_event_with_fields, Event, Severity};
use crate::query::{translate, FilterSet, Translation};
use crate::store::RecordStore;

/// Facade over a record store
pub struct StringService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> Clone for StringService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RecordStore> StringService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build over a store shared with other owners
    pub fn with_store(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Analyze and store a new value.
    ///
    /// Fails with `DuplicateRecord` if identical content is already
    /// stored. The early `exists` check avoids analyzing duplicates; the
    /// store's own insert check is what guarantees uniqueness under races.
    pub fn create(&self, value: &str) -> StringResult<StringRecord> {
        let id = content_hash(value);
        if self.store.exists(&id)? {
            log_event_at(Severity::Warn, Event::StringDuplicate, &[("id", id.as_str())]);
            return Err(StringError::DuplicateRecord(id));
        }

        let record = analyze(value);
        if let Err(err) = self.store.insert(record.clone()) {
            if matches!(err, StringError::DuplicateRecord(_)) {
                log_event_at(Severity::Warn, Event::StringDuplicate, &[("id", id.as_str())]);
            }
            return Err(err);
        }

        let length = record.properties.length.to_string();
        log_event_with_fields(
            Event::StringCreated,
            &[("id", record.id.as_str()), ("length", length.as_str())],
        );
        Ok(record)
    }

    /// Look up by the hash of the literal value
    pub fn get(&self, value: &str) -> StringResult<StringRecord> {
        self.store
            .find(&content_hash(value))?
            .ok_or(StringError::NotFound)
    }

    /// All records matching the structured filters
    pub fn list(&self, filters: &FilterSet) -> StringResult<Vec<StringRecord>> {
        self.store.filter(&|record| filters.matches(record))
    }

    /// Translate a natural-language query and apply the resulting filters
    pub fn search(&self, query: &str) -> StringResult<(Vec<StringRecord>, Translation)> {
        let translation = match translate(query) {
            Ok(translation) => translation,
            Err(err) => {
                log_event_at(
                    Severity::Warn,
                    Event::QueryRejected,
                    &[("query", query), ("reason", err.code())],
                );
                return Err(err);
            }
        };

        let rules = translation.matched_rules.join(",");
        log_event_with_fields(
            Event::QueryTranslated,
            &[("query", query), ("rules", rules.as_str())],
        );

        let records = self.list(&translation.filters)?;
        Ok((records, translation))
    }

    /// Delete by the hash of the literal value
    pub fn delete(&self, value: &str) -> StringResult<()> {
        let id = content_hash(value);
        if !self.store.remove(&id)? {
            return Err(StringError::NotFound);
        }

        log_event_with_fields(Event::StringDeleted, &[("id", id.as_str())]);
        Ok(())
    }
}
