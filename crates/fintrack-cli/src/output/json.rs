//! JSON output formatting.

use serde_json::{json, Value};

use fintrack_core::entry::DATE_FORMAT;
use fintrack_core::{CategoryTotals, Entry, MonthlyReport};

/// Convert an entry to JSON, tagged with its ledger position.
pub fn entry_json(index: usize, entry: &Entry) -> Value {
    json!({
        "index": index,
        "amount": entry.amount(),
        "category": entry.category(),
        "date": entry.date().format(DATE_FORMAT).to_string(),
        "type": entry.kind().as_str(),
    })
}

pub fn entries_json(entries: &[Entry]) -> Vec<Value> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| entry_json(index, entry))
        .collect()
}

pub fn balance_json(balance: f64, currency: &str) -> Value {
    json!({
        "balance": balance,
        "currency": currency,
    })
}

/// Report totals plus its entries. Entry indices are positions within the report.
pub fn report_json(report: &MonthlyReport) -> Value {
    let summary = report.summary();
    json!({
        "month": summary.month,
        "year": summary.year,
        "count": summary.count,
        "income": summary.income,
        "expense": summary.expense,
        "net": summary.net,
        "entries": entries_json(report.entries()),
    })
}

pub fn chart_json(totals: &CategoryTotals) -> Value {
    json!({ "spending_by_category": totals })
}

pub fn files_json(files: &[String]) -> Value {
    json!({ "files": files })
}
