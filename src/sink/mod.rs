//! Destination layer
//!
//! The extraction pipeline hands quads to a `Destination`; `TripleLogSink`
//! accumulates them per document and appends one record to the shared log.

mod config;
mod destination;
mod log_sink;

pub use config::{default_log_path, SinkConfig};
pub use destination::Destination;
pub use log_sink::TripleLogSink;
