use fintrack_core::Ledger;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::input::{self, interactive};
use crate::ui::{badge, banner, print, receipt, Badge, UiContext};

use super::{entry_from_fields, require_entry, show_numbered};

/// `fintrack edit`: replace the entry at a position and save the ledger.
pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None)?;
    let destination = ctx.destination(args.save.as_deref())?;
    let mut ledger = ctx.open_ledger(false)?;

    let current = require_entry(&ledger, args.index)?;
    let entry = entry_from_fields(&args.fields, Some(current), interactive(args.no_input))?;
    let rendered = entry.render(&ui.currency);
    ledger.edit(args.index, entry, &destination)?;

    if !ctx.quiet() {
        let index = args.index.to_string();
        let file = ledger.resolve(&destination).display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Entry updated",
                &[("Index", index.as_str()), ("Entry", rendered.as_str()), ("File", file.as_str())],
            ),
        );
    }
    Ok(())
}

/// Menu action: pick an entry, prompt for new values, save to a chosen file.
pub fn edit_interactive(
    ui: &UiContext,
    ledger: &mut Ledger,
    default_file: Option<&str>,
) -> anyhow::Result<()> {
    print(ui, &banner(ui, "Edit entry"));
    if !show_numbered(ui, ledger, "edit") {
        return Ok(());
    }

    let index = input::prompt_index("\nIndex of the entry to edit")?;
    let current = require_entry(ledger, index)?;
    let entry = input::prompt_entry(Some(current))?;
    let file = input::prompt_file_name("File to save to (e.g. data.csv)", default_file)?;

    ledger.edit(index, entry, &file)?;
    print(ui, &badge(ui, Badge::Ok, &format!("Entry {} updated and saved to {}.", index, file)));
    Ok(())
}
