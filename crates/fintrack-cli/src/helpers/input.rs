//! Interactive prompts built on `dialoguer`.
//!
//! Every prompt validates in place, so the user is asked again instead of
//! the action failing on a typo. Ctrl-C surfaces as an `Interrupted` IO error.

use std::io::{self, IsTerminal};
use std::str::FromStr;

use chrono::{Datelike, Local};
use dialoguer::console::Term;
use dialoguer::{Completion, Confirm, FuzzySelect, Input, Select};

use fintrack_core::entry::{format_amount, parse_amount, parse_date, DATE_FORMAT};
use fintrack_core::{Entry, Kind};

use super::parsing::ensure_csv_extension;

/// Label of the file picker choice that starts an empty ledger.
pub const CREATE_NEW_FILE: &str = "Create new file";

/// Whether prompts may be shown.
pub fn interactive(no_input: bool) -> bool {
    !no_input && io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Completes `income` / `expense` from any prefix, ignoring case.
struct KindCompletion;

impl Completion for KindCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let typed = input.trim().to_lowercase();
        if typed.is_empty() {
            return None;
        }
        [Kind::Income, Kind::Expense]
            .iter()
            .map(Kind::as_str)
            .find(|k| k.starts_with(&typed) && *k != typed)
            .map(str::to_string)
    }
}

pub fn prompt_amount(label: &str, default: Option<f64>) -> anyhow::Result<f64> {
    let mut input = Input::<String>::new()
        .with_prompt(label)
        .validate_with(|value: &String| parse_amount(value).map(|_| ()).map_err(|e| e.to_string()));
    if let Some(amount) = default {
        input = input.default(format_amount(amount));
    }
    let value = input.interact_text()?;
    Ok(parse_amount(&value)?)
}

pub fn prompt_category(label: &str, default: Option<&str>) -> anyhow::Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(label)
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("Category cannot be empty")
            } else {
                Ok(())
            }
        });
    if let Some(category) = default {
        input = input.default(category.to_string());
    }
    Ok(input.interact_text()?.trim().to_string())
}

pub fn prompt_date(label: &str, default: Option<&str>) -> anyhow::Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(label)
        .validate_with(|value: &String| parse_date(value).map(|_| ()).map_err(|e| e.to_string()));
    if let Some(date) = default {
        input = input.default(date.to_string());
    }
    Ok(input.interact_text()?)
}

pub fn prompt_kind(label: &str, default: Option<Kind>) -> anyhow::Result<Kind> {
    let completion = KindCompletion;
    let mut input = Input::<String>::new()
        .with_prompt(label)
        .completion_with(&completion)
        .validate_with(|value: &String| {
            Kind::from_str(value)
                .map(|_| ())
                .map_err(|e| e.to_string())
        });
    if let Some(kind) = default {
        input = input.default(kind.as_str().to_string());
    }
    let value = input.interact_text()?;
    Ok(Kind::from_str(&value)?)
}

/// Ask for every entry field, prefilled from `current` when editing.
pub fn prompt_entry(current: Option<&Entry>) -> anyhow::Result<Entry> {
    let (amount_label, category_label, date_label, kind_label) = if current.is_some() {
        ("New amount", "New category", "New date (YYYY-MM-DD)", "New type (income/expense)")
    } else {
        ("Amount", "Category", "Date (YYYY-MM-DD)", "Type (income/expense)")
    };
    let current_date = current.map(|e| e.date().format(DATE_FORMAT).to_string());

    let amount = prompt_amount(amount_label, current.map(Entry::amount))?;
    let category = prompt_category(category_label, current.map(Entry::category))?;
    let date = prompt_date(date_label, current_date.as_deref())?;
    let kind = prompt_kind(kind_label, current.map(Entry::kind))?;

    Ok(Entry::new(amount, category, parse_date(&date)?, kind)?)
}

/// Ask for a data file name; `.csv` is appended when missing.
pub fn prompt_file_name(label: &str, default: Option<&str>) -> anyhow::Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(label)
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("File name cannot be empty")
            } else {
                Ok(())
            }
        });
    if let Some(name) = default {
        input = input.default(name.to_string());
    }
    Ok(ensure_csv_extension(&input.interact_text()?))
}

/// Ask for a zero-based entry position. Range is checked by the ledger.
pub fn prompt_index(label: &str) -> anyhow::Result<usize> {
    Ok(Input::<usize>::new().with_prompt(label).interact_text()?)
}

pub fn prompt_year() -> anyhow::Result<i32> {
    let current_year = Local::now().year();
    Ok(Input::<i32>::new()
        .with_prompt("Year")
        .default(current_year)
        .interact_text()?)
}

pub fn prompt_month() -> anyhow::Result<u32> {
    Ok(Input::<u32>::new()
        .with_prompt("Month (1-12)")
        .validate_with(|month: &u32| {
            if (1..=12).contains(month) {
                Ok(())
            } else {
                Err("Month must be between 1 and 12")
            }
        })
        .interact_text()?)
}

pub fn confirm_overwrite(name: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", name))
        .default(false)
        .interact()?)
}

/// Pick one of `files`, or `None` for a new empty ledger.
pub fn select_data_file(files: &[String]) -> anyhow::Result<Option<String>> {
    let mut items: Vec<&str> = files.iter().map(String::as_str).collect();
    items.push(CREATE_NEW_FILE);
    let choice = FuzzySelect::new()
        .with_prompt("Choose a data file")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(files.get(choice).cloned())
}

/// Show a menu; `None` when the user backs out with Esc or `q`.
pub fn select_action(labels: &[&str]) -> anyhow::Result<Option<usize>> {
    Ok(Select::new()
        .with_prompt("Choose an action")
        .items(labels)
        .default(0)
        .interact_opt()?)
}

pub fn clear_screen() -> anyhow::Result<()> {
    let term = Term::stdout();
    if term.is_term() {
        term.clear_screen()?;
    }
    Ok(())
}

pub fn pause() -> anyhow::Result<()> {
    let term = Term::stdout();
    term.write_line("\nPress Enter to continue...")?;
    term.read_line()?;
    Ok(())
}
