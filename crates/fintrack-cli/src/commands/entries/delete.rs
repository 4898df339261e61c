use fintrack_core::Ledger;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::input;
use crate::ui::{badge, banner, print, receipt, Badge, UiContext};

use super::{require_entry, show_numbered};

/// `fintrack delete`: remove the entry at a position and save the ledger.
pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None)?;
    let destination = ctx.destination(args.save.as_deref())?;
    let mut ledger = ctx.open_ledger(false)?;

    let removed = ledger.delete(args.index, &destination)?;

    if !ctx.quiet() {
        let index = args.index.to_string();
        let rendered = removed.render(&ui.currency);
        let file = ledger.resolve(&destination).display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Entry deleted",
                &[("Index", index.as_str()), ("Entry", rendered.as_str()), ("File", file.as_str())],
            ),
        );
    }
    Ok(())
}

/// Menu action: pick an entry, delete it, save to a chosen file.
pub fn delete_interactive(
    ui: &UiContext,
    ledger: &mut Ledger,
    default_file: Option<&str>,
) -> anyhow::Result<()> {
    print(ui, &banner(ui, "Delete entry"));
    if !show_numbered(ui, ledger, "delete") {
        return Ok(());
    }

    let index = input::prompt_index("\nIndex of the entry to delete")?;
    require_entry(ledger, index)?;
    let file = input::prompt_file_name("File to save to (e.g. data.csv)", default_file)?;

    let removed = ledger.delete(index, &file)?;
    print(
        ui,
        &badge(ui, Badge::Ok, &format!("Deleted {} and saved to {}.", removed, file)),
    );
    Ok(())
}
