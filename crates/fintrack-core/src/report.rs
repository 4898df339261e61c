//! Aggregations over entries: totals, monthly reports, spending by category.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::entry::{Entry, Kind};

/// Expense total per category, ordered by category name.
pub type CategoryTotals = BTreeMap<String, f64>;

/// Sum income and expense amounts separately, returning `(income, expense)`.
pub fn totals(entries: &[Entry]) -> (f64, f64) {
    let income = sum_of(entries, Kind::Income);
    let expense = sum_of(entries, Kind::Expense);
    (income, expense)
}

fn sum_of(entries: &[Entry], kind: Kind) -> f64 {
    entries
        .iter()
        .filter(|e| e.kind() == kind)
        .map(Entry::amount)
        .fold(0.0, |acc, amount| acc + amount)
}

/// Total expense per category. Income entries are ignored; categories are
/// grouped by exact string equality.
pub fn spending_by_category(entries: &[Entry]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for entry in entries.iter().filter(|e| e.kind().is_expense()) {
        *totals.entry(entry.category().to_string()).or_insert(0.0) += entry.amount();
    }
    totals
}

/// Entries dated within one calendar month, in ledger order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    month: u32,
    year: i32,
    entries: Vec<Entry>,
}

impl MonthlyReport {
    /// Select the entries of `month`/`year`. The month is assumed valid.
    pub(crate) fn collect(entries: &[Entry], month: u32, year: i32) -> Self {
        let entries = entries
            .iter()
            .filter(|e| e.date().month() == month && e.date().year() == year)
            .cloned()
            .collect();
        Self {
            month,
            year,
            entries,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
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

    pub fn income(&self) -> f64 {
        sum_of(&self.entries, Kind::Income)
    }

    pub fn expense(&self) -> f64 {
        sum_of(&self.entries, Kind::Expense)
    }

    /// Balance for the period (income minus expense).
    pub fn net(&self) -> f64 {
        self.income() - self.expense()
    }

    /// Period label, e.g. `10/2023`.
    pub fn period(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            month: self.month,
            year: self.year,
            count: self.entries.len(),
            income: self.income(),
            expense: self.expense(),
            net: self.net(),
        }
    }
}

/// Serializable totals of a monthly report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSummary {
    pub month: u32,
    pub year: i32,
    pub count: usize,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}
