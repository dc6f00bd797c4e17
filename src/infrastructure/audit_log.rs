//! Append-only audit log
//!
//! One CSV row per processed upload. The header row is materialized lazily
//! on the first append to a fresh file; the column order is frozen as
//! `Plate Number, Date, Time, Image, Status`. Each append is a single
//! buffered write plus flush, so concurrent appends from the surrounding
//! server never interleave partial records. No cross-process locking is
//! provided (single-process assumption).

use crate::error::Result;
use crate::types::LogRecord;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Frozen column schema of the log file
const HEADER: [&str; 5] = ["Plate Number", "Date", "Time", "Image", "Status"];

/// Owns the log file's write cursor. Unlike list sources, write failures
/// here are genuine errors and propagate to the caller.
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first if the file is fresh.
    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let is_fresh = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_fresh {
            writer.write_record(HEADER)?;
        }

        writer.write_record([
            record.plate.as_str(),
            record.date.as_str(),
            record.time.as_str(),
            record.image.as_str(),
            record.status.as_str(),
        ])?;
        writer.flush()?;

        Ok(())
    }

    /// Read back all data rows, oldest first. Rows that no longer parse are
    /// skipped rather than failing the whole read.
    pub fn entries(&self) -> Result<Vec<LogRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for record in reader.records().flatten() {
            if record.len() < 5 {
                continue;
            }
            records.push(LogRecord {
                plate: record[0].to_string(),
                date: record[1].to_string(),
                time: record[2].to_string(),
                image: record[3].to_string(),
                status: record[4].to_string(),
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccessStatus;
    use tempfile::tempdir;

    #[test]
    fn test_header_written_once() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("vehicle_log.csv"));

        log.append(&LogRecord::capture("KA01AB1234", "a.jpg", AccessStatus::Granted))
            .unwrap();
        log.append(&LogRecord::capture("MH12XY9876", "b.jpg", AccessStatus::Denied))
            .unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Plate Number,Date,Time,Image,Status");
        assert!(lines[1].starts_with("KA01AB1234,"));
        assert!(lines[1].ends_with(",a.jpg,GRANTED"));
        assert!(lines[2].starts_with("MH12XY9876,"));
        assert!(lines[2].ends_with(",b.jpg,DENIED"));
    }

    #[test]
    fn test_entries_round_back_in_call_order() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("vehicle_log.csv"));

        log.append(&LogRecord::capture("KA01AB1234", "a.jpg", AccessStatus::Granted))
            .unwrap();
        log.append(&LogRecord::capture("DL8CX4850", "b.jpg", AccessStatus::Unknown))
            .unwrap();

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].plate, "KA01AB1234");
        assert_eq!(entries[0].status, "GRANTED");
        assert_eq!(entries[1].plate, "DL8CX4850");
        assert_eq!(entries[1].image, "b.jpg");
    }

    #[test]
    fn test_entries_on_missing_file() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("never_written.csv"));
        assert!(log.entries().unwrap().is_empty());
    }

    #[test]
    fn test_append_to_unwritable_path_errors() {
        let log = AuditLog::new("/nonexistent-dir/vehicle_log.csv");
        let result = log.append(&LogRecord::capture(
            "KA01AB1234",
            "a.jpg",
            AccessStatus::Granted,
        ));
        assert!(result.is_err());
    }
}
