//! LogAppender: lock, write, sync, unlock

use super::lock::FileLock;
use super::SEPARATOR;
use crate::error::{SinkError, SinkResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a successful append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendReceipt {
    pub bytes_written: usize,
}

/// Appends framed records to one log file shared with other writers.
#[derive(Debug, Clone)]
pub struct LogAppender {
    path: PathBuf,
}

impl LogAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.
    ///
    /// The whole record is written as a single buffer while the lock is held,
    /// then synced before the lock is released. The parent directory must exist.
    pub fn append(&self, document_id: &str, resource_uri: &str, blob: &[u8]) -> SinkResult<AppendReceipt> {
        if has_line_break(document_id.as_bytes()) {
            return Err(SinkError::InvalidField { field: "document_id" });
        }
        if has_line_break(resource_uri.as_bytes()) {
            return Err(SinkError::InvalidField { field: "resource_uri" });
        }
        if has_line_break(blob) {
            return Err(SinkError::InvalidField { field: "blob" });
        }

        let mut buf = Vec::with_capacity(document_id.len() + resource_uri.len() + blob.len() + 4);
        buf.extend_from_slice(document_id.as_bytes());
        buf.push(SEPARATOR);
        buf.extend_from_slice(resource_uri.as_bytes());
        buf.push(SEPARATOR);
        buf.extend_from_slice(blob);
        buf.push(SEPARATOR);
        buf.push(SEPARATOR);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SinkError::io(&self.path, e))?;

        {
            let _lock = FileLock::exclusive(&file, &self.path)?;
            let mut writer = &file;
            writer.write_all(&buf).map_err(|e| SinkError::io(&self.path, e))?;
            writer.flush().map_err(|e| SinkError::io(&self.path, e))?;
            file.sync_data().map_err(|e| SinkError::io(&self.path, e))?;
        }

        debug!(path = %self.path.display(), document = %document_id, bytes = buf.len(), "appended record");
        Ok(AppendReceipt {
            bytes_written: buf.len(),
        })
    }
}

fn has_line_break(bytes: &[u8]) -> bool {
    bytes.iter().any(|b| *b == b'\n' || *b == b'\r')
}
