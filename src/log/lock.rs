//! Scoped advisory locks on the log file

use crate::error::{SinkError, SinkResult};
use fs2::FileExt;
use std::fs::File;
use std::path::Path;
use tracing::warn;

/// Holds an advisory lock on an open file; unlocks on drop.
///
/// Writers take it exclusively, readers shared. Both block until granted.
pub(crate) struct FileLock<'a> {
    file: &'a File,
    path: &'a Path,
}

impl<'a> FileLock<'a> {
    pub(crate) fn exclusive(file: &'a File, path: &'a Path) -> SinkResult<Self> {
        FileExt::lock_exclusive(file).map_err(|source| SinkError::Lock {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file, path })
    }

    pub(crate) fn shared(file: &'a File, path: &'a Path) -> SinkResult<Self> {
        FileExt::lock_shared(file).map_err(|source| SinkError::Lock {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file, path })
    }
}

impl Drop for FileLock<'_> {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(self.file) {
            // Closing the descriptor releases the lock anyway
            warn!(path = %self.path.display(), error = %e, "failed to release log lock");
        }
    }
}
