//! Export and data file listing.

use chrono::Local;

use fintrack_core::Ledger;

use crate::app::AppContext;
use crate::cli::{ExportArgs, FilesArgs};
use crate::errors::CliError;
use crate::helpers::input::{self, interactive};
use crate::helpers::{default_export_name, ensure_csv_extension};
use crate::output::json;
use crate::ui::{badge, banner, print, receipt, Badge, UiContext};

const EXPORT_CANCELLED: &str = "Export cancelled.";

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None)?;
    let ledger = ctx.open_ledger(false)?;

    let name = match args.name.as_deref() {
        Some(name) if !name.trim().is_empty() => ensure_csv_extension(name),
        _ => default_export_name(Local::now().date_naive()),
    };

    if !args.force && ledger.resolve(&name).exists() {
        if !interactive(args.no_input) {
            return Err(CliError::invalid_input(format!(
                "{} already exists (pass --force to overwrite)",
                name
            ))
            .into());
        }
        if !input::confirm_overwrite(&name)? {
            print(&ui, EXPORT_CANCELLED);
            return Ok(());
        }
    }

    let path = ledger.export(&name)?;
    if !ctx.quiet() {
        let entries = ledger.len().to_string();
        let file = path.display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Ledger exported",
                &[("Entries", entries.as_str()), ("File", file.as_str())],
            ),
        );
    }
    Ok(())
}

/// Menu action: ask for a name (today's default offered), confirm overwrites.
pub fn export_interactive(ui: &UiContext, ledger: &Ledger) -> anyhow::Result<()> {
    print(ui, &banner(ui, "Export data"));
    let default_name = default_export_name(Local::now().date_naive());
    let name = input::prompt_file_name("File name", Some(&default_name))?;

    if ledger.resolve(&name).exists() && !input::confirm_overwrite(&name)? {
        print(ui, EXPORT_CANCELLED);
        return Ok(());
    }

    ledger.export(&name)?;
    print(ui, &badge(ui, Badge::Ok, &format!("Data exported to {}.", name)));
    Ok(())
}

pub fn handle_files(ctx: &AppContext, args: &FilesArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None)?;
    let ledger = ctx.empty_ledger()?;
    let files = ledger.data_files()?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&json::files_json(&files))?);
        return Ok(());
    }
    if files.is_empty() {
        if !ctx.quiet() {
            print(
                &ui,
                &format!("No CSV files in {}.", ledger.data_dir().display()),
            );
        }
        return Ok(());
    }
    for file in &files {
        print(&ui, file);
    }
    Ok(())
}
