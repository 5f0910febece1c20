//! BatchGrouper: merges a batch of quads into a document's accumulated state
//!
//! Quads are partitioned by dataset tag; each group resolves its consumer once,
//! then every quad is keyed by its canonical triple and upserted. A repeated
//! key overwrites the earlier entry, so merging the same batch twice is a no-op.

use super::document::{DocumentRecord, TripleRecord};
use crate::dataset::DatasetClassifier;
use crate::triple::{HashKeyer, Quad};
use std::collections::BTreeMap;
use tracing::debug;

/// What one merge did to the accumulated state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Keys that were not present before
    pub inserted: usize,
    /// Keys that replaced an existing entry
    pub overwritten: usize,
    /// Distinct dataset tags in the batch
    pub groups_touched: usize,
}

impl MergeStats {
    pub fn is_noop(&self) -> bool {
        self.inserted == 0 && self.overwritten == 0
    }
}

/// Groups quads by dataset and folds them into a [`DocumentRecord`].
#[derive(Debug, Clone)]
pub struct BatchGrouper {
    default_language: String,
}

impl BatchGrouper {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Merge `batch` into `record`. The caller holds the only reference to the record.
    pub fn merge(&self, record: &mut DocumentRecord, batch: &[Quad]) -> MergeStats {
        let mut stats = MergeStats::default();
        if batch.is_empty() {
            return stats;
        }

        // Stable partition: quads keep their batch order within a dataset
        let mut by_dataset: BTreeMap<&str, Vec<&Quad>> = BTreeMap::new();
        for quad in batch {
            by_dataset.entry(quad.dataset.as_str()).or_default().push(quad);
        }
        stats.groups_touched = by_dataset.len();

        for (dataset, quads) in by_dataset {
            let consumer = DatasetClassifier::classify(dataset);
            for quad in quads {
                let triple = quad.to_triple(&self.default_language);
                let key = HashKeyer::key_triple(&triple);
                if record.upsert(consumer.clone(), key, TripleRecord::from_triple(&triple)) {
                    stats.overwritten += 1;
                } else {
                    stats.inserted += 1;
                }
            }
        }

        debug!(
            document = %record.document_id,
            inserted = stats.inserted,
            overwritten = stats.overwritten,
            groups = stats.groups_touched,
            "merged batch"
        );
        stats
    }
}

impl Default for BatchGrouper {
    fn default() -> Self {
        Self::new("en")
    }
}
