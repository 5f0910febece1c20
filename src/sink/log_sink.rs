//! TripleLogSink: the Destination implementation backed by the shared record log
//!
//! One instance per source document:
//! - `write()` merges each batch into the document's accumulated state
//! - `close()` serializes the state and appends exactly one record
//! - append failures are logged and the record is dropped (at-most-once)
//!
//! `write` and `close` share a single per-instance mutex, so concurrent calls
//! on one instance never interleave their mutations.

use super::config::SinkConfig;
use super::destination::Destination;
use crate::error::{SinkError, SinkResult};
use crate::log::{AppendReceipt, LogAppender};
use crate::record::{BatchGrouper, DocumentRecord, MergeStats, RecordSerializer};
use crate::triple::Quad;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

enum SinkState {
    Accumulating(DocumentRecord),
    Closed,
}

pub struct TripleLogSink {
    document_id: String,
    resource_uri: String,
    grouper: BatchGrouper,
    appender: LogAppender,
    state: Mutex<SinkState>,
}

impl TripleLogSink {
    /// Create a sink for the page `page_title`, identified downstream by `document_id`.
    pub fn new(config: &SinkConfig, page_title: &str, document_id: impl Into<String>) -> Self {
        let document_id = document_id.into();
        let resource_uri = config.resource_uri(page_title);
        let record = DocumentRecord::new(document_id.clone(), resource_uri.clone());
        Self {
            document_id,
            resource_uri,
            grouper: BatchGrouper::new(config.default_language.clone()),
            appender: LogAppender::new(config.log_path.clone()),
            state: Mutex::new(SinkState::Accumulating(record)),
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn resource_uri(&self) -> &str {
        &self.resource_uri
    }

    pub fn is_closed(&self) -> bool {
        matches!(*self.lock_state(), SinkState::Closed)
    }

    /// Copy of the accumulated state, or `None` once closed.
    pub fn snapshot(&self) -> Option<DocumentRecord> {
        match &*self.lock_state() {
            SinkState::Accumulating(record) => Some(record.clone()),
            SinkState::Closed => None,
        }
    }

    /// Merge a batch, reporting what changed. Fails only after close.
    pub fn merge(&self, batch: &[Quad]) -> SinkResult<MergeStats> {
        let mut state = self.lock_state();
        match &mut *state {
            SinkState::Accumulating(record) => Ok(self.grouper.merge(record, batch)),
            SinkState::Closed => Err(SinkError::AlreadyClosed(self.document_id.clone())),
        }
    }

    /// Serialize and append the accumulated record, propagating failures.
    ///
    /// The sink is closed afterwards whatever the outcome; the record is not retained.
    pub fn try_close(&self) -> SinkResult<AppendReceipt> {
        let mut state = self.lock_state();
        let record = match std::mem::replace(&mut *state, SinkState::Closed) {
            SinkState::Accumulating(record) => record,
            SinkState::Closed => return Err(SinkError::AlreadyClosed(self.document_id.clone())),
        };

        let blob = RecordSerializer::serialize(&record)?;
        self.appender
            .append(&record.document_id, &record.resource_uri, blob.as_bytes())
    }

    fn lock_state(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Destination for TripleLogSink {
    fn open(&self) {
        if self.is_closed() {
            warn!(document = %self.document_id, "open called on a closed sink");
        } else {
            debug!(document = %self.document_id, resource = %self.resource_uri, "sink opened");
        }
    }

    fn write(&self, batch: &[Quad]) {
        if let Err(e) = self.merge(batch) {
            warn!(document = %self.document_id, quads = batch.len(), error = %e, "dropping batch");
        }
    }

    fn close(&self) {
        match self.try_close() {
            Ok(receipt) => info!(
                document = %self.document_id,
                path = %self.appender.path().display(),
                bytes = receipt.bytes_written,
                "record appended"
            ),
            Err(e @ SinkError::Serialization(_)) => {
                error!(document = %self.document_id, error = %e, "record could not be serialized")
            }
            Err(e @ SinkError::AlreadyClosed(_)) => {
                warn!(document = %self.document_id, error = %e, "close called twice")
            }
            Err(e) => warn!(
                document = %self.document_id,
                path = %self.appender.path().display(),
                error = %e,
                "record cannot be written to log; discarding"
            ),
        }
    }
}
