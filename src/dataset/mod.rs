//! Dataset classification
//!
//! Every dataset tag maps to the downstream consumer that owns its records.
//! The set of known datasets is closed: a new tag needs a new table entry.

mod classifier;

pub use classifier::{ConsumerId, Dataset, DatasetClassifier};
