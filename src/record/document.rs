//! DocumentRecord: everything one source document contributed before close

use crate::dataset::ConsumerId;
use crate::triple::{ContentKey, HashKeyer, Triple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable triple: each position is a canonical pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleRecord {
    pub s: String,
    pub p: String,
    pub o: String,
}

impl TripleRecord {
    pub fn from_triple(triple: &Triple) -> Self {
        Self {
            s: triple.subject_pattern(),
            p: triple.predicate_pattern(),
            o: triple.object_pattern(),
        }
    }

    pub fn key(&self) -> ContentKey {
        HashKeyer::key(&self.s, &self.p, &self.o)
    }
}

/// Consumer identity → content key → triple. Ordered so rendering is deterministic.
pub type Groups = BTreeMap<ConsumerId, BTreeMap<ContentKey, TripleRecord>>;

/// Accumulated state for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub document_id: String,
    pub resource_uri: String,
    pub groups: Groups,
}

impl DocumentRecord {
    pub fn new(document_id: impl Into<String>, resource_uri: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            resource_uri: resource_uri.into(),
            groups: Groups::new(),
        }
    }

    pub fn from_parts(
        document_id: impl Into<String>,
        resource_uri: impl Into<String>,
        groups: Groups,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            resource_uri: resource_uri.into(),
            groups,
        }
    }

    /// Insert at `key` within `consumer`'s group. Returns true if an entry was replaced.
    pub fn upsert(&mut self, consumer: ConsumerId, key: ContentKey, triple: TripleRecord) -> bool {
        self.groups
            .entry(consumer)
            .or_default()
            .insert(key, triple)
            .is_some()
    }

    pub fn group(&self, consumer: &ConsumerId) -> Option<&BTreeMap<ContentKey, TripleRecord>> {
        self.groups.get(consumer)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total entries across all groups.
    pub fn triple_count(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
