//! Entry values: one recorded financial movement.
//!
//! Entries are immutable once constructed. Editing an entry in a ledger means
//! replacing it with a freshly constructed one.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Date format used for input, storage, and rendering.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Currency suffix appended when an entry is rendered.
pub const CURRENCY_SUFFIX: &str = "руб.";

/// Classification of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    /// Storage form (`income` / `expense`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Uppercase form used in rendered lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse, as accepted from user input.
impl FromStr for Kind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TrackerError::validation(format!(
                "Type must be 'income' or 'expense', got '{}'",
                s.trim()
            ))),
        }
    }
}

/// One financial movement.
#[derive(Debug, Clone)]
pub struct Entry {
    amount: f64,
    category: String,
    date: NaiveDate,
    kind: Kind,
}

impl Entry {
    /// Build an entry from already-typed values.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Validation` if:
    /// - `category` is empty or whitespace-only
    /// - `amount` is NaN or infinite
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        kind: Kind,
    ) -> Result<Self> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(TrackerError::validation("Category cannot be empty"));
        }
        if !amount.is_finite() {
            return Err(TrackerError::validation(format!(
                "Amount must be a finite number, got {}",
                amount
            )));
        }
        Ok(Self {
            amount,
            category,
            date,
            kind,
        })
    }

    /// Build an entry from a date string and a kind string.
    ///
    /// The date must be a valid `YYYY-MM-DD` calendar date; the kind is
    /// matched case-insensitively.
    pub fn parse(amount: f64, category: impl Into<String>, date: &str, kind: &str) -> Result<Self> {
        let date = parse_date(date)?;
        let kind = kind.parse::<Kind>()?;
        Self::new(amount, category, date, kind)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Signed contribution of this entry to a balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            Kind::Income => self.amount,
            Kind::Expense => -self.amount,
        }
    }

    /// Render with a custom currency suffix.
    pub fn render(&self, currency: &str) -> String {
        format!(
            "{} | {} | {}: {} {}",
            self.date.format(DATE_FORMAT),
            self.kind.label(),
            self.category,
            format_amount(self.amount),
            currency
        )
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
            && self.category == other.category
            && self.date == other.date
            && self.kind == other.kind
    }
}

// Amounts are always finite, so `==` on f64 is reflexive here.
impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so both must hash alike.
        let amount = if self.amount == 0.0 { 0.0f64 } else { self.amount };
        amount.to_bits().hash(state);
        self.category.hash(state);
        self.date.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(CURRENCY_SUFFIX))
    }
}

/// Format an amount as the shortest round-trip decimal, keeping at least one
/// fractional digit (`100.0`, `2500.5`).
pub fn format_amount(amount: f64) -> String {
    format!("{:?}", amount)
}

/// Parse a user-supplied amount.
pub fn parse_amount(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    let amount: f64 = trimmed.parse().map_err(|_| {
        TrackerError::validation(format!("Amount must be a number, got '{}'", trimmed))
    })?;
    if !amount.is_finite() {
        return Err(TrackerError::validation(format!(
            "Amount must be a finite number, got '{}'",
            trimmed
        )));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        TrackerError::validation(format!(
            "Invalid date (expected YYYY-MM-DD): {}",
            value.trim()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn food() -> Entry {
        Entry::parse(100.0, "Food", "2023-10-01", "expense").unwrap()
    }

    #[test]
    fn test_entry_creation() {
        let entry = food();
        assert_eq!(entry.amount(), 100.0);
        assert_eq!(entry.category(), "Food");
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
        assert_eq!(entry.kind(), Kind::Expense);
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(food().to_string(), "2023-10-01 | EXPENSE | Food: 100.0 руб.");
    }

    #[test]
    fn test_entry_display_fractional_and_income() {
        let entry = Entry::parse(2500.5, "Salary", "2023-10-03", "income").unwrap();
        assert_eq!(entry.to_string(), "2023-10-03 | INCOME | Salary: 2500.5 руб.");
    }

    #[test]
    fn test_entry_render_custom_currency() {
        assert_eq!(food().render("EUR"), "2023-10-01 | EXPENSE | Food: 100.0 EUR");
    }

    #[test]
    fn test_equal_entries_hash_equal() {
        let mut set = HashSet::new();
        set.insert(food());
        set.insert(food());
        assert_eq!(set.len(), 1);
        assert_eq!(food(), food());
    }

    #[test]
    fn test_negative_zero_hashes_like_zero() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let a = Entry::new(0.0, "Misc", date, Kind::Income).unwrap();
        let b = Entry::new(-0.0, "Misc", date, Kind::Income).unwrap();
        assert_eq!(a, b);
        let set: HashSet<Entry> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_entries_differing_in_one_field_are_not_equal() {
        let other = Entry::parse(100.0, "Food", "2023-10-01", "income").unwrap();
        assert_ne!(food(), other);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = Entry::parse(100.0, "Food", "2023-13-40", "expense").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = Entry::parse(100.0, "", "2023-10-01", "expense").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        let err = Entry::parse(100.0, "   ", "2023-10-01", "expense").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("Income".parse::<Kind>().unwrap(), Kind::Income);
        assert_eq!(" EXPENSE ".parse::<Kind>().unwrap(), Kind::Expense);
        assert!("transfer".parse::<Kind>().is_err());
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert!(Entry::new(f64::NAN, "Food", date, Kind::Expense).is_err());
        assert!(Entry::new(f64::INFINITY, "Food", date, Kind::Expense).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 42.5 ").unwrap(), 42.5);
        assert_eq!(parse_amount("-10").unwrap(), -10.0);
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(food().signed_amount(), -100.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100.0");
        assert_eq!(format_amount(-3.25), "-3.25");
    }
}
