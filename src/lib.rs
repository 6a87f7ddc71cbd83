//! string-analyzer - analyze, store and query strings
//!
//! Each submitted string is analyzed once (length, palindrome status,
//! word count, unique characters, character frequencies, SHA-256), stored
//! under its content hash, and can then be fetched, filtered with
//! structured parameters or searched with a small natural-language
//! vocabulary.

pub mod analysis;
pub mod cli;
pub mod errors;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod service;
pub mod store;

pub use analysis::{analyze, StringProperties, StringRecord};
pub use errors::{StringError, StringResult};
pub use query::{translate, FilterSet, Translation};
pub use service::StringService;
pub use store::{InMemoryRecordStore, RecordStore};
