//! The ledger: an ordered, in-memory list of entries backed by CSV files.
//!
//! Order is insertion order (or file order after `load`) and is load-bearing:
//! `edit` and `delete` address entries by zero-based position.
//!
//! Persistence is explicit. `add` only touches memory; `edit` and `delete`
//! rewrite the whole destination file; `export` writes a full copy.

use std::path::{Path, PathBuf};

use crate::chart::SpendingChart;
use crate::entry::Entry;
use crate::error::{Result, TrackerError};
use crate::report::{self, CategoryTotals, MonthlyReport};
use crate::storage;

/// Directory for data files when none is configured.
pub const DEFAULT_DATA_DIR: &str = "files";

/// Ordered collection of entries plus the directory its files live in.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<Entry>,
    data_dir: PathBuf,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl Ledger {
    /// Create an empty ledger whose files live in `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            data_dir: data_dir.into(),
        }
    }

    /// Create a ledger pre-populated with `entries`, in the given order.
    pub fn from_entries(data_dir: impl Into<PathBuf>, entries: Vec<Entry>) -> Self {
        Self {
            entries,
            data_dir: data_dir.into(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve a file name against the data directory.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(name)
    }

    /// CSV files available in the data directory, sorted by name.
    ///
    /// The data directory is created if it does not exist yet.
    pub fn data_files(&self) -> Result<Vec<String>> {
        storage::list_csv_files(&self.data_dir)
    }

    /// Replace the in-memory entries with the contents of `source`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Storage` if the file cannot be opened or any
    /// record is malformed. The ledger is left untouched on failure.
    pub fn load(&mut self, source: impl AsRef<Path>) -> Result<()> {
        let path = self.resolve(source);
        let entries = storage::read_entries(&path)?;
        tracing::debug!(path = %path.display(), entries = entries.len(), "loaded ledger");
        self.entries = entries;
        Ok(())
    }

    /// Append an entry in memory. Nothing is written to disk.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Replace the entry at `index`, then rewrite `destination` with every entry.
    ///
    /// # Errors
    ///
    /// - `TrackerError::Index` if `index >= len()`
    /// - `TrackerError::Storage` if the destination cannot be written; the
    ///   previous entry is restored first
    pub fn edit(
        &mut self,
        index: usize,
        entry: Entry,
        destination: impl AsRef<Path>,
    ) -> Result<()> {
        self.check_index(index)?;
        let path = self.resolve(destination);

        let previous = std::mem::replace(&mut self.entries[index], entry);
        if let Err(err) = storage::write_entries(&path, &self.entries) {
            self.entries[index] = previous;
            return Err(err);
        }

        tracing::info!(index, path = %path.display(), "edited entry");
        Ok(())
    }

    /// Remove the entry at `index`, then rewrite `destination` with the rest.
    ///
    /// Returns the removed entry. Later entries shift down by one position.
    ///
    /// # Errors
    ///
    /// - `TrackerError::Index` if `index >= len()`
    /// - `TrackerError::Storage` if the destination cannot be written; the
    ///   entry is put back first
    pub fn delete(&mut self, index: usize, destination: impl AsRef<Path>) -> Result<Entry> {
        self.check_index(index)?;
        let path = self.resolve(destination);

        let removed = self.entries.remove(index);
        if let Err(err) = storage::write_entries(&path, &self.entries) {
            self.entries.insert(index, removed);
            return Err(err);
        }

        tracing::info!(index, path = %path.display(), "deleted entry");
        Ok(removed)
    }

    /// Income total minus expense total over every entry.
    pub fn balance(&self) -> f64 {
        let (income, expense) = report::totals(&self.entries);
        income - expense
    }

    /// Entries dated within `month` (1-12) of `year`, in ledger order.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Validation` if `month` is outside `1..=12`.
    pub fn monthly_report(&self, month: u32, year: i32) -> Result<MonthlyReport> {
        if !(1..=12).contains(&month) {
            return Err(TrackerError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(MonthlyReport::collect(&self.entries, month, year))
    }

    /// Write every entry to `filename` inside the data directory.
    ///
    /// Always a full overwrite; the data directory is created if missing.
    /// Returns the path written.
    pub fn export(&self, filename: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.resolve(filename);
        storage::write_entries(&path, &self.entries)?;
        tracing::info!(path = %path.display(), entries = self.entries.len(), "exported ledger");
        Ok(path)
    }

    /// Expense total per category.
    pub fn spending_by_category(&self) -> CategoryTotals {
        report::spending_by_category(&self.entries)
    }

    /// Hand the spending-by-category aggregate to a chart renderer.
    pub fn plot_spending_by_category<C>(&self, chart: &mut C) -> Result<()>
    where
        C: SpendingChart + ?Sized,
    {
        chart.render(&self.spending_by_category())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(TrackerError::Index {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}
