//! Per-document accumulated state and its serialized form

mod document;
mod grouper;
mod serializer;

pub use document::{DocumentRecord, Groups, TripleRecord};
pub use grouper::{BatchGrouper, MergeStats};
pub use serializer::RecordSerializer;
