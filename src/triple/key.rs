//! Content keys: deterministic hashes of a triple's canonical form

use super::term::Triple;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of a triple's canonical N-Triples line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentKey(String);

impl ContentKey {
    /// Length of every key, in hex characters.
    pub const LEN: usize = 64;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes content keys. Stateless; the key depends only on the three patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashKeyer;

impl HashKeyer {
    /// Key for already-canonical subject, predicate and object patterns.
    pub fn key(s: &str, p: &str, o: &str) -> ContentKey {
        let mut hasher = Sha256::new();
        hasher.update(s.as_bytes());
        hasher.update(b" ");
        hasher.update(p.as_bytes());
        hasher.update(b" ");
        hasher.update(o.as_bytes());
        hasher.update(b" .");
        ContentKey(format!("{:x}", hasher.finalize()))
    }

    pub fn key_triple(triple: &Triple) -> ContentKey {
        Self::key(
            &triple.subject_pattern(),
            &triple.predicate_pattern(),
            &triple.object_pattern(),
        )
    }
}
