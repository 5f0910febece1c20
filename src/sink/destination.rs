//! Destination: the interface the extraction pipeline writes through

use crate::triple::Quad;

/// Receives the quads extracted from one source document.
///
/// Lifecycle: `open()` once, `write()` any number of times, `close()` once.
/// None of these report failure to the caller; implementations log instead
/// so that a failing destination never stalls the pipeline.
pub trait Destination: Send + Sync {
    fn open(&self);

    fn write(&self, batch: &[Quad]);

    fn close(&self);
}
