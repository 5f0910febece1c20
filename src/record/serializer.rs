//! RecordSerializer: renders the group mapping as one line of JSON
//!
//! Output shape:
//! ```text
//! {"<consumer>":{"<content key>":{"s":"<...>","p":"<...>","o":"..."}}}
//! ```
//! Compact JSON never contains a raw line break (string contents are escaped),
//! so the blob always fits on the single line the log format reserves for it.

use super::document::{DocumentRecord, Groups};
use crate::error::SinkResult;

pub struct RecordSerializer;

impl RecordSerializer {
    /// Render the groups of `doc`. An empty record renders as `{}`.
    pub fn serialize(doc: &DocumentRecord) -> SinkResult<String> {
        Ok(serde_json::to_string(&doc.groups)?)
    }

    /// Parse a blob produced by [`RecordSerializer::serialize`].
    pub fn deserialize(blob: &str) -> SinkResult<Groups> {
        Ok(serde_json::from_str(blob)?)
    }
}
