//! The shared append-only record log
//!
//! Each record is four newline-terminated lines:
//!
//! ```text
//! <document id>
//! <resource uri>
//! <json blob>
//!
//! ```
//!
//! There is no header, footer, length prefix or checksum; readers parse
//! sequentially. Writers serialize through a whole-file exclusive lock;
//! readers hold a shared lock, so they only ever see complete records.

mod appender;
mod lock;
mod reader;

pub use appender::{AppendReceipt, LogAppender};
pub use reader::LogReader;

pub(crate) const SEPARATOR: u8 = b'\n';
