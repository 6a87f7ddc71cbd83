//! # Record Store
//!
//! Exclusive owner of all analyzed records, keyed by content hash.
//!
//! # Invariants
//!
//! - At most one record per id. `insert` rejects duplicates atomically.
//! - Readers never observe a half-applied `insert` or `remove`.
//! - Callers receive clones; nothing outside the store holds a reference.

mod memory;

pub use memory::InMemoryRecordStore;

use crate::analysis::StringRecord;
use crate::errors::StringResult;

/// Trait for record storage operations
pub trait RecordStore: Send + Sync {
    /// Whether a record with this id is stored
    fn exists(&self, id: &str) -> StringResult<bool>;

    /// Insert a new record. Fails with `DuplicateRecord` if the id is taken.
    fn insert(&self, record: StringRecord) -> StringResult<()>;

    /// Look up a record by id
    fn find(&self, id: &str) -> StringResult<Option<StringRecord>>;

    /// Delete by id. Returns true iff a record existed.
    fn remove(&self, id: &str) -> StringResult<bool>;

    /// Every record satisfying `predicate`, in insertion order
    fn filter(&self, predicate: &dyn Fn(&StringRecord) -> bool)
        -> StringResult<Vec<StringRecord>>;

    /// Number of stored records
    fn len(&self) -> StringResult<usize>;

    fn is_empty(&self) -> StringResult<bool> {
        Ok(self.len()? == 0)
    }
}
