//! In-memory record store

use std::sync::RwLock;

use crate::analysis::StringRecord;
use crate::errors::{StringError, StringResult};

use super::RecordStore;

/// Process-lifetime store backed by a vector in insertion order.
///
/// One `RwLock` guards the whole collection; mutations take the write
/// half, lookups and filters take the read half.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<StringRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn exists(&self, id: &str) -> StringResult<bool> {
        let records = self
            .records
            .read()
            .map_err(|_| StringError::lock_poisoned())?;
        Ok(records.iter().any(|r| r.id == id))
    }

    fn insert(&self, record: StringRecord) -> StringResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StringError::lock_poisoned())?;

        if records.iter().any(|r| r.id == record.id) {
            return Err(StringError::DuplicateRecord(record.id));
        }

        records.push(record);
        Ok(())
    }

    fn find(&self, id: &str) -> StringResult<Option<StringRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StringError::lock_poisoned())?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    fn remove(&self, id: &str) -> StringResult<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StringError::lock_poisoned())?;

        match records.iter().position(|r| r.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn filter(
        &self,
        predicate: &dyn Fn(&StringRecord) -> bool,
    ) -> StringResult<Vec<StringRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StringError::lock_poisoned())?;
        Ok(records.iter().filter(|r| predicate(r)).cloned().collect())
    }

    fn len(&self) -> StringResult<usize> {
        let records = self
            .records
            .read()
            .map_err(|_| StringError::lock_poisoned())?;
        Ok(records.len())
    }
}
