//! Monthly report command handler.

use chrono::{Datelike, Local};

use fintrack_core::Ledger;

use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::errors::CliError;
use crate::helpers::input::{self, interactive};
use crate::helpers::parse_output_format;
use crate::output::{json, text};
use crate::ui::{banner, blank_line, header, print, UiContext};

pub fn handle_report(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, format)?;
    let ledger = ctx.open_ledger(false)?;

    let month = match args.month {
        Some(month) => month,
        None if interactive(args.no_input) => input::prompt_month()?,
        None => return Err(CliError::invalid_input("MONTH is required without a terminal").into()),
    };
    let year = args.year.unwrap_or_else(|| Local::now().year());

    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, "report", Some(&format!("{:02}/{}", month, year))));
        blank_line(&ui);
    }
    show_report(&ui, &ledger, month, year)
}

/// Menu action: ask for year and month, then print the report.
pub fn report_interactive(ui: &UiContext, ledger: &Ledger) -> anyhow::Result<()> {
    print(ui, &banner(ui, "Monthly report"));
    let year = input::prompt_year()?;
    let month = input::prompt_month()?;
    blank_line(ui);
    show_report(ui, ledger, month, year)
}

fn show_report(ui: &UiContext, ledger: &Ledger, month: u32, year: i32) -> anyhow::Result<()> {
    let report = ledger.monthly_report(month, year)?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&json::report_json(&report))?);
        return Ok(());
    }
    if report.is_empty() {
        print(ui, &format!("No entries for {}.", report.period()));
        return Ok(());
    }
    print(ui, &text::report(ui, &report));
    Ok(())
}
