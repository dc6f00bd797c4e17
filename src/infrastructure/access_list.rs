//! Allow/deny list sources
//!
//! Lists are small flat files maintained by operators and edited out of
//! band, so they are re-read on every decision. No caching: an operator
//! edit is visible on the very next request.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a list source. Deployment config, never runtime-detected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListFormat {
    /// CSV with a header row, plate in the first column
    #[default]
    CsvWithHeader,
    /// One plate per line, no header
    PlainLines,
}

impl std::fmt::Display for ListFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFormat::CsvWithHeader => write!(f, "csv-with-header"),
            ListFormat::PlainLines => write!(f, "plain-lines"),
        }
    }
}

/// An ordered list of plate entries, upper-cased and trimmed on load.
/// Duplicates are tolerated; membership is exact case-insensitive equality.
#[derive(Debug, Clone, Default)]
pub struct AccessList {
    plates: Vec<String>,
}

impl AccessList {
    /// Load a list from its source file.
    ///
    /// A missing or unreadable source is an empty list, not an error: a gate
    /// with no deny list simply never denies.
    pub fn load(path: &Path, format: ListFormat) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let plates = match format {
            ListFormat::CsvWithHeader => read_csv_entries(path),
            ListFormat::PlainLines => read_line_entries(path),
        };

        Self { plates }
    }

    /// Build a list from in-memory entries (entries are normalized the same
    /// way file loads are).
    pub fn from_entries<I: IntoIterator<Item = String>>(entries: I) -> Self {
        Self {
            plates: entries
                .into_iter()
                .map(|p| p.trim().to_uppercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Exact case-insensitive membership. No fuzzy matching, no wildcards.
    pub fn contains(&self, plate: &str) -> bool {
        let needle = plate.trim().to_uppercase();
        self.plates.iter().any(|p| *p == needle)
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.plates.iter().map(|p| p.as_str())
    }
}

fn read_csv_entries(path: &Path) -> Vec<String> {
    let mut reader = match csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(_) => return Vec::new(),
    };

    let mut plates = Vec::new();
    for record in reader.records().flatten() {
        if let Some(plate) = record.get(0) {
            let plate = plate.trim().to_uppercase();
            if !plate.is_empty() {
                plates.push(plate);
            }
        }
    }
    plates
}

fn read_line_entries(path: &Path) -> Vec<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    content
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_missing_source_is_empty_list() {
        let list = AccessList::load(
            Path::new("/nonexistent/whitelist.csv"),
            ListFormat::CsvWithHeader,
        );
        assert!(list.is_empty());
        assert!(!list.contains("KA01AB1234"));
    }

    #[test]
    fn test_csv_source_skips_header_and_uppercases() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("whitelist.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Plate Number,Owner").unwrap();
        writeln!(file, "ka01ab1234,Asha").unwrap();
        writeln!(file, " MH12XY9876 ,Ravi").unwrap();
        drop(file);

        let list = AccessList::load(&path, ListFormat::CsvWithHeader);
        assert_eq!(list.len(), 2);
        assert!(list.contains("KA01AB1234"));
        assert!(list.contains("mh12xy9876"));
        assert!(!list.contains("PLATE NUMBER"));
    }

    #[test]
    fn test_plain_lines_source_has_no_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blacklist.txt");
        std::fs::write(&path, "ka01ab1234\n\n  dl8cx4850  \n").unwrap();

        let list = AccessList::load(&path, ListFormat::PlainLines);
        assert_eq!(list.len(), 2);
        assert!(list.contains("KA01AB1234"));
        assert!(list.contains("DL8CX4850"));
    }

    #[test]
    fn test_duplicates_tolerated() {
        let list = AccessList::from_entries(vec![
            "KA01AB1234".to_string(),
            "KA01AB1234".to_string(),
        ]);
        assert_eq!(list.len(), 2);
        assert!(list.contains("KA01AB1234"));
    }
}
