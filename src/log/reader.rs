//! LogReader: sequential parser for the record log
//!
//! Used by the batch-loader side (and the CLI's `inspect`). `read_all` holds a
//! shared lock for the whole read, so it waits out any append in progress.

use super::lock::FileLock;
use crate::error::{SinkError, SinkResult};
use crate::record::{DocumentRecord, RecordSerializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct LogReader;

impl LogReader {
    /// Read and parse every record in the file at `path`, under a shared lock.
    pub fn read_all(path: impl AsRef<Path>) -> SinkResult<Vec<DocumentRecord>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SinkError::io(path, e))?;

        let mut contents = String::new();
        {
            let _lock = FileLock::shared(&file, path)?;
            let mut reader = &file;
            reader
                .read_to_string(&mut contents)
                .map_err(|e| SinkError::io(path, e))?;
        }
        Self::parse(&contents)
    }

    /// Parse records from log text. Line numbers in errors are 1-based.
    pub fn parse(contents: &str) -> SinkResult<Vec<DocumentRecord>> {
        if !contents.is_empty() && !contents.ends_with('\n') {
            return Err(SinkError::MalformedRecord {
                line: contents.lines().count(),
                reason: "truncated final line".to_string(),
            });
        }

        let mut records = Vec::new();
        let mut lines = contents.lines().enumerate().map(|(i, l)| (i + 1, l));

        while let Some((start, document_id)) = lines.next() {
            let (_, resource_uri) = lines.next().ok_or_else(|| truncated(start))?;
            let (blob_line, blob) = lines.next().ok_or_else(|| truncated(start))?;
            let (sep_line, separator) = lines.next().ok_or_else(|| truncated(start))?;

            if !separator.is_empty() {
                return Err(SinkError::MalformedRecord {
                    line: sep_line,
                    reason: "expected blank separator line".to_string(),
                });
            }

            let groups = RecordSerializer::deserialize(blob).map_err(|e| SinkError::MalformedRecord {
                line: blob_line,
                reason: format!("undecodable blob: {}", e),
            })?;
            records.push(DocumentRecord::from_parts(document_id, resource_uri, groups));
        }

        Ok(records)
    }
}

fn truncated(start: usize) -> SinkError {
    SinkError::MalformedRecord {
        line: start,
        reason: "record ends before its separator line".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogAppender;
    use fs2::FileExt;
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::thread;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn empty_log_has_no_records() {
        assert!(LogReader::parse("").unwrap().is_empty());
    }

    #[test]
    fn parses_consecutive_records() {
        let log = "1\nhttp://a\n{}\n\n2\nhttp://b\n{\"c\":{}}\n\n";
        let records = LogReader::parse(log).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].document_id, "1");
        assert_eq!(records[1].resource_uri, "http://b");
        assert_eq!(records[1].group_count(), 1);
    }

    #[test]
    fn missing_separator_is_malformed() {
        let err = LogReader::parse("1\nhttp://a\n{}\n2\n").unwrap_err();
        assert!(matches!(err, SinkError::MalformedRecord { line: 4, .. }));
    }

    #[test]
    fn torn_tail_is_malformed() {
        let err = LogReader::parse("1\nhttp://a\n{}\n\n2\nhttp://b\n{\"c\"").unwrap_err();
        assert!(matches!(err, SinkError::MalformedRecord { .. }));
    }

    #[test]
    fn bad_blob_reports_its_line() {
        let err = LogReader::parse("1\nhttp://a\nnot json\n\n").unwrap_err();
        assert!(matches!(err, SinkError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn read_waits_for_a_write_in_progress() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("triples.log");
        LogAppender::new(&path).append("1", "http://a", b"{}").unwrap();

        // A writer holds the lock with only half of its record on disk
        let mut writer = OpenOptions::new().append(true).open(&path).unwrap();
        FileExt::lock_exclusive(&writer).unwrap();
        writer.write_all(b"2\nhttp://b\n").unwrap();

        let reader_path = path.clone();
        let reader = thread::spawn(move || LogReader::read_all(reader_path));
        thread::sleep(Duration::from_millis(100));
        assert!(!reader.is_finished());

        writer.write_all(b"{}\n\n").unwrap();
        FileExt::unlock(&writer).unwrap();

        let records = reader.join().unwrap().unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.document_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn missing_log_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = LogReader::read_all(dir.path().join("triples.log")).unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
    }
}
