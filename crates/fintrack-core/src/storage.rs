//! CSV storage for ledger entries.
//!
//! File layout: UTF-8, comma-separated, one header row followed by one record
//! per entry:
//!
//! ```text
//! amount,category,date,type
//! 100.0,Food,2023-10-01,expense
//! 2500.0,Salary,2023-10-03,income
//! ```
//!
//! Writes are whole-file overwrites. There is no locking and no temp-file
//! rename; a concurrent external change is silently overwritten.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::{format_amount, parse_date, Entry, Kind, DATE_FORMAT};
use crate::error::{Result, TrackerError};

/// Header row, in field order.
pub const HEADER: [&str; 4] = ["amount", "category", "date", "type"];

/// File extension for data files.
pub const EXTENSION: &str = "csv";

/// A record as read from disk, before entry validation.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    amount: f64,
    category: String,
    date: String,
    #[serde(rename = "type")]
    kind: Kind,
}

/// A record as written to disk.
#[derive(Debug, Serialize)]
struct RecordRef<'a> {
    amount: String,
    category: &'a str,
    date: String,
    #[serde(rename = "type")]
    kind: Kind,
}

impl<'a> From<&'a Entry> for RecordRef<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            amount: format_amount(entry.amount()),
            category: entry.category(),
            date: entry.date().format(DATE_FORMAT).to_string(),
            kind: entry.kind(),
        }
    }
}

/// Read every entry from a CSV file, in file order.
///
/// # Errors
///
/// Returns `TrackerError::Storage` if:
/// - The file cannot be opened or read
/// - The first row is not exactly `amount,category,date,type`
/// - A record is missing a field or has an unparsable amount
/// - A record has a malformed date, an unknown type, or an empty category
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        TrackerError::storage(format!("Cannot open {}: {}", path.display(), e))
    })?;
    let headers = reader
        .headers()
        .map_err(|e| TrackerError::storage(format!("{}: {}", path.display(), e)))?
        .clone();
    if headers.iter().ne(HEADER) {
        return Err(TrackerError::storage(format!(
            "{}: expected header {}",
            path.display(),
            HEADER.join(",")
        )));
    }

    let mut entries = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| TrackerError::storage(format!("{}: {}", path.display(), e)))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let stored: StoredRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| record_error(path, line, e.to_string()))?;
        let entry = parse_date(&stored.date)
            .and_then(|date| Entry::new(stored.amount, stored.category, date, stored.kind))
            .map_err(|e| record_error(path, line, validation_message(e)))?;
        entries.push(entry);
    }

    tracing::debug!(path = %path.display(), records = entries.len(), "read entries");
    Ok(entries)
}

/// Overwrite `path` with the header row and every entry.
///
/// Missing parent directories are created.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                TrackerError::storage(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| TrackerError::storage(format!("Cannot write {}: {}", path.display(), e)))?;
    writer.write_record(HEADER)?;
    for entry in entries {
        writer.serialize(RecordRef::from(entry))?;
    }
    writer
        .flush()
        .map_err(|e| TrackerError::storage(format!("Cannot write {}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), records = entries.len(), "wrote entries");
    Ok(())
}

/// List the CSV file names in `dir`, sorted. The directory is created if absent.
pub fn list_csv_files(dir: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(dir).map_err(|e| {
        TrackerError::storage(format!("Cannot create directory {}: {}", dir.display(), e))
    })?;

    let mut names = Vec::new();
    for item in fs::read_dir(dir)? {
        let item = item?;
        let path = item.path();
        let is_csv = path
            .extension()
            .map(|ext| ext == EXTENSION)
            .unwrap_or(false);
        if is_csv && path.is_file() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

fn record_error(path: &Path, line: u64, message: String) -> TrackerError {
    TrackerError::storage(format!("{}: line {}: {}", path.display(), line, message))
}

fn validation_message(err: TrackerError) -> String {
    match err {
        TrackerError::Validation(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::parse(100.0, "Food", "2023-10-01", "expense").unwrap(),
            Entry::parse(2500.0, "Salary", "2023-10-03", "income").unwrap(),
        ]
    }

    #[test]
    fn test_write_produces_expected_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");

        write_entries(&path, &sample()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "amount,category,date,type\n100.0,Food,2023-10-01,expense\n2500.0,Salary,2023-10-03,income\n"
        );
    }

    #[test]
    fn test_write_empty_keeps_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_entries(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "amount,category,date,type\n");
        assert!(read_entries(&path).unwrap().is_empty());
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");

        write_entries(&path, &sample()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_read_preserves_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(
            &path,
            "amount,category,date,type\n5,Coffee,2023-10-02,expense\n100.0,Food,2023-10-01,expense\n",
        )
        .unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category(), "Coffee");
        assert_eq!(entries[0].amount(), 5.0);
        assert_eq!(entries[1].category(), "Food");
    }

    #[test]
    fn test_quoted_category_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        let entries = vec![Entry::parse(12.5, "Food, drinks", "2023-10-05", "expense").unwrap()];

        write_entries(&path, &entries).unwrap();

        assert_eq!(read_entries(&path).unwrap(), entries);
    }

    #[test]
    fn test_read_missing_file_is_storage_error() {
        let dir = tempdir().unwrap();
        let err = read_entries(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
    }

    #[test]
    fn test_read_malformed_date_reports_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "amount,category,date,type\n100.0,Food,2023-10-01,expense\n1.0,Food,2023-13-40,expense\n",
        )
        .unwrap();

        let err = read_entries(&path).unwrap_err();
        match err {
            TrackerError::Storage(message) => assert!(message.contains("line 3"), "{}", message),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_bad_records() {
        let dir = tempdir().unwrap();
        let cases = [
            "amount,category,date,type\nabc,Food,2023-10-01,expense\n",
            "amount,category,date,type\n1.0,Food,2023-10-01\n",
            "amount,category,date,type\n1.0,Food,2023-10-01,EXPENSE\n",
            "amount,category,date,type\n1.0,,2023-10-01,expense\n",
            "amount,category,date\n1.0,Food,2023-10-01\n",
        ];
        for (i, contents) in cases.iter().enumerate() {
            let path = dir.path().join(format!("bad{}.csv", i));
            fs::write(&path, contents).unwrap();
            let err = read_entries(&path).unwrap_err();
            assert!(matches!(err, TrackerError::Storage(_)), "case {}", i);
        }
    }

    #[test]
    fn test_read_requires_exact_header() {
        let dir = tempdir().unwrap();
        let cases = [
            "100.0,Food,2023-10-01,expense\n",
            "x,y\n",
            "category,amount,type,date\nFood,100.0,expense,2023-10-01\n",
        ];
        for (i, contents) in cases.iter().enumerate() {
            let path = dir.path().join(format!("header{}.csv", i));
            fs::write(&path, contents).unwrap();
            match read_entries(&path).unwrap_err() {
                TrackerError::Storage(message) => assert!(
                    message.contains("expected header amount,category,date,type"),
                    "case {}: {}",
                    i,
                    message
                ),
                other => panic!("case {}: unexpected error: {:?}", i, other),
            }
        }
    }

    #[test]
    fn test_list_csv_files_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("files");
        assert!(list_csv_files(&data).unwrap().is_empty());
        assert!(data.is_dir());

        fs::write(data.join("b.csv"), "").unwrap();
        fs::write(data.join("a.csv"), "").unwrap();
        fs::write(data.join("notes.txt"), "").unwrap();
        fs::create_dir(data.join("dir.csv")).unwrap();

        assert_eq!(list_csv_files(&data).unwrap(), vec!["a.csv", "b.csv"]);
    }
}
