//! Error types shared by the serializer, the log and the sink

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering, appending or reading records
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to acquire lock on {}: {source}", .path.display())]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Field {field} contains a line break and cannot be framed")]
    InvalidField { field: &'static str },

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Sink for document {0} is already closed")]
    AlreadyClosed(String),
}

impl SinkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;
