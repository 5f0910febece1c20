//! Quadsink: deduplicating append-only log sink for extracted RDF quads
//!
//! Each source document gets its own sink. Quads written to it are grouped by
//! dataset, keyed by a hash of their canonical triple (so rewriting a fact is
//! idempotent) and, on close, appended as one record to a log file shared by
//! every producer, under an exclusive file lock.
//!
//! # Core Concepts
//!
//! - **Quad**: a triple tagged with the dataset that produced it
//! - **Content key**: SHA-256 of the triple's canonical N-Triples form
//! - **Consumer**: the downstream extractor identity a dataset maps to
//! - **Record**: document id, resource URI and the consumer → key → triple blob
//!
//! # Example
//!
//! ```no_run
//! use quadsink::{xsd, Destination, Quad, SinkConfig, TripleLogSink};
//!
//! let config = SinkConfig::default().with_log_path("/tmp/triples.log");
//! let sink = TripleLogSink::new(&config, "Albert Einstein", "736");
//! sink.open();
//! sink.write(&[Quad::literal(
//!     "labels",
//!     "http://dbpedia.org/resource/Albert_Einstein",
//!     "http://www.w3.org/2000/01/rdf-schema#label",
//!     "Albert Einstein",
//!     xsd::STRING,
//! )]);
//! sink.close();
//! ```

pub mod dataset;
mod error;
pub mod log;
pub mod record;
pub mod sink;
pub mod triple;

pub use dataset::{ConsumerId, Dataset, DatasetClassifier};
pub use error::{SinkError, SinkResult};
pub use log::{AppendReceipt, LogAppender, LogReader};
pub use record::{BatchGrouper, DocumentRecord, Groups, MergeStats, RecordSerializer, TripleRecord};
pub use sink::{default_log_path, Destination, SinkConfig, TripleLogSink};
pub use triple::{xsd, ContentKey, HashKeyer, LiteralTag, Quad, Term, Triple};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
