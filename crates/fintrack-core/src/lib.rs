//! # Fintrack Core
//!
//! Core library for Fintrack - a single-user, CLI-first personal finance ledger.
//!
//! This crate provides the domain model, the CSV-backed ledger and its queries,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **entry**: Entry values and input-boundary parsing
//! - **ledger**: Ordered entry list with load/save/edit/delete/query operations
//! - **report**: Monthly reports and per-category spending aggregates
//! - **chart**: Collaborator trait for rendering spending charts
//! - **storage**: CSV file format (read, write, discovery)

pub mod chart;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod report;
pub mod storage;

pub use chart::SpendingChart;
pub use entry::{Entry, Kind, CURRENCY_SUFFIX};
pub use error::{Result, TrackerError};
pub use ledger::{Ledger, DEFAULT_DATA_DIR};
pub use report::{CategoryTotals, MonthlyReport};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
