//! Content hashing for record identity

use sha2::{Digest, Sha256};

/// SHA-256 of the raw value, rendered as 64 lowercase hex characters.
///
/// No case folding or trimming happens here: `"Abc"` and `"abc"` are
/// different records.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
