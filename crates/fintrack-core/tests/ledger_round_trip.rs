use std::fs;

use fintrack_core::{Entry, Ledger, TrackerError};
use tempfile::tempdir;

fn entries() -> Vec<Entry> {
    vec![
        Entry::parse(100.0, "Food", "2023-10-01", "expense").expect("valid entry"),
        Entry::parse(2500.0, "Salary", "2023-10-03", "income").expect("valid entry"),
        Entry::parse(0.1, "Café, bar", "2024-02-29", "expense").expect("valid entry"),
        Entry::parse(-12.75, "Refund", "2023-12-31", "income").expect("valid entry"),
        Entry::parse(100.0, "Food", "2023-10-01", "expense").expect("valid entry"),
    ]
}

#[test]
fn test_export_then_load_reproduces_entries() {
    let dir = tempdir().expect("tempdir");
    let data_dir = dir.path().join("files");
    let original = Ledger::from_entries(&data_dir, entries());

    original.export("round_trip.csv").expect("export should succeed");

    let mut loaded = Ledger::new(&data_dir);
    loaded.load("round_trip.csv").expect("load should succeed");
    assert_eq!(loaded.entries(), original.entries());
}

#[test]
fn test_load_sample_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("data.csv"),
        "amount,category,date,type\n100.0,Food,2023-10-01,expense\n2500.0,Salary,2023-10-03,income\n",
    )
    .expect("write fixture");

    let mut ledger = Ledger::new(dir.path());
    ledger.load("data.csv").expect("load should succeed");

    assert_eq!(ledger.balance(), 2400.0);
    assert_eq!(ledger.monthly_report(10, 2023).expect("report").len(), 2);
    assert!(ledger.monthly_report(11, 2023).expect("report").is_empty());
}

#[test]
fn test_edit_and_delete_rewrite_whole_file() {
    let dir = tempdir().expect("tempdir");
    let mut ledger = Ledger::from_entries(dir.path(), entries());

    let replacement = Entry::parse(7.0, "Tea", "2023-10-02", "expense").expect("valid entry");
    ledger
        .edit(0, replacement.clone(), "ledger.csv")
        .expect("edit should succeed");
    ledger.delete(4, "ledger.csv").expect("delete should succeed");

    let mut reloaded = Ledger::new(dir.path());
    reloaded.load("ledger.csv").expect("load should succeed");
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.get(0), Some(&replacement));
    assert_eq!(reloaded.entries(), ledger.entries());
}

#[test]
fn test_delete_boundary_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let mut ledger = Ledger::from_entries(dir.path(), entries());
    let len = ledger.len();

    let result = ledger.delete(len, "ledger.csv");

    assert!(matches!(result, Err(TrackerError::Index { .. })));
    assert_eq!(ledger.len(), len);
    assert!(!dir.path().join("ledger.csv").exists());
}

#[test]
fn test_absolute_destination_bypasses_data_dir() {
    let dir = tempdir().expect("tempdir");
    let elsewhere = tempdir().expect("tempdir");
    let target = elsewhere.path().join("abs.csv");
    let ledger = Ledger::from_entries(dir.path().join("files"), entries());

    let written = ledger.export(&target).expect("export should succeed");

    assert_eq!(written, target);
    assert!(target.exists());
}
