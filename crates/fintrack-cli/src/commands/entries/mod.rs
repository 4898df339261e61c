//! Entry commands: add, list, edit, delete.

mod add;
mod delete;
mod edit;
mod list;

pub use add::{add_interactive, handle_add};
pub use delete::{delete_interactive, handle_delete};
pub use edit::{edit_interactive, handle_edit};
pub use list::handle_list;

use std::str::FromStr;

use fintrack_core::entry::{parse_amount, parse_date};
use fintrack_core::{Entry, Kind, Ledger, TrackerError};

use crate::cli::EntryFields;
use crate::errors::CliError;
use crate::helpers::input;
use crate::output::text::entry_lines;
use crate::ui::{print, UiContext};

/// Build an entry from command-line values, prompting for the missing ones
/// on a terminal. When editing, missing values keep those of `current`.
pub(crate) fn entry_from_fields(
    fields: &EntryFields,
    current: Option<&Entry>,
    interactive: bool,
) -> anyhow::Result<Entry> {
    if !interactive && current.is_none() && !fields.is_complete() {
        return Err(CliError::invalid_input(
            "AMOUNT, CATEGORY, DATE and TYPE are required without a terminal",
        )
        .into());
    }

    let amount = match (&fields.amount, current) {
        (Some(value), _) => parse_amount(value)?,
        (None, Some(entry)) if !interactive => entry.amount(),
        (None, current) => input::prompt_amount("Amount", current.map(Entry::amount))?,
    };
    let category = match (&fields.category, current) {
        (Some(value), _) => value.trim().to_string(),
        (None, Some(entry)) if !interactive => entry.category().to_string(),
        (None, current) => input::prompt_category("Category", current.map(Entry::category))?,
    };
    let date = match (&fields.date, current) {
        (Some(value), _) => parse_date(value)?,
        (None, Some(entry)) if !interactive => entry.date(),
        (None, current) => {
            let default = current.map(|e| e.date().to_string());
            parse_date(&input::prompt_date("Date (YYYY-MM-DD)", default.as_deref())?)?
        }
    };
    let kind = match (&fields.kind, current) {
        (Some(value), _) => Kind::from_str(value)?,
        (None, Some(entry)) if !interactive => entry.kind(),
        (None, current) => input::prompt_kind("Type (income/expense)", current.map(Entry::kind))?,
    };

    Ok(Entry::new(amount, category, date, kind)?)
}

/// Print the numbered entries ahead of an index prompt.
///
/// Returns `false` (after telling the user) when there is nothing to pick.
pub(crate) fn show_numbered(ui: &UiContext, ledger: &Ledger, verb: &str) -> bool {
    if ledger.is_empty() {
        print(ui, &format!("No entries to {}.", verb));
        return false;
    }
    print(ui, "Entries:");
    print(ui, &entry_lines(ui, ledger.entries()));
    true
}

/// Position must name an existing entry.
pub(crate) fn require_entry(ledger: &Ledger, index: usize) -> Result<&Entry, TrackerError> {
    ledger.get(index).ok_or(TrackerError::Index {
        index,
        len: ledger.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(
        amount: Option<&str>,
        category: Option<&str>,
        date: Option<&str>,
        kind: Option<&str>,
    ) -> EntryFields {
        EntryFields {
            amount: amount.map(String::from),
            category: category.map(String::from),
            date: date.map(String::from),
            kind: kind.map(String::from),
        }
    }

    #[test]
    fn test_complete_fields_build_entry() {
        let f = fields(Some("-5"), Some("Refund"), Some("2023-10-01"), Some("Income"));
        let entry = entry_from_fields(&f, None, false).unwrap();
        assert_eq!(entry.amount(), -5.0);
        assert_eq!(entry.kind(), Kind::Income);
    }

    #[test]
    fn test_incomplete_add_without_terminal_fails() {
        let f = fields(Some("5"), None, None, None);
        let err = entry_from_fields(&f, None, false).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_edit_keeps_current_values() {
        let current = Entry::parse(100.0, "Food", "2023-10-01", "expense").unwrap();
        let f = fields(Some("150"), None, None, None);
        let entry = entry_from_fields(&f, Some(&current), false).unwrap();
        assert_eq!(entry.amount(), 150.0);
        assert_eq!(entry.category(), "Food");
        assert_eq!(entry.date(), current.date());
        assert_eq!(entry.kind(), Kind::Expense);
    }

    #[test]
    fn test_invalid_value_is_validation_error() {
        let f = fields(Some("1"), Some("Food"), Some("01.10.2023"), Some("expense"));
        let err = entry_from_fields(&f, None, false).unwrap_err();
        assert!(matches!(err.downcast_ref::<TrackerError>(), Some(TrackerError::Validation(_))));
    }

    #[test]
    fn test_require_entry() {
        let ledger = Ledger::from_entries(
            "files",
            vec![Entry::parse(1.0, "A", "2023-10-01", "income").unwrap()],
        );
        assert!(require_entry(&ledger, 0).is_ok());
        assert!(matches!(
            require_entry(&ledger, 1),
            Err(TrackerError::Index { index: 1, len: 1 })
        ));
    }
}
