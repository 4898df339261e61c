//! Add entry command handler.

use fintrack_core::Ledger;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::input::{self, interactive};
use crate::ui::{badge, banner, print, receipt, Badge, UiContext};

use super::entry_from_fields;

/// `fintrack add`: append one entry, then save the whole ledger.
pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None)?;
    let destination = ctx.destination(args.save.as_deref())?;
    let mut ledger = ctx.open_ledger(true)?;

    let entry = entry_from_fields(&args.fields, None, interactive(args.no_input))?;
    let rendered = entry.render(&ui.currency);
    ledger.add(entry);
    let path = ledger.export(&destination)?;

    if !ctx.quiet() {
        let index = (ledger.len() - 1).to_string();
        let file = path.display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Entry added",
                &[("Index", index.as_str()), ("Entry", rendered.as_str()), ("File", file.as_str())],
            ),
        );
    }
    Ok(())
}

/// Menu action: prompt for an entry and add it in memory.
pub fn add_interactive(ui: &UiContext, ledger: &mut Ledger) -> anyhow::Result<()> {
    print(ui, &banner(ui, "Add entry"));
    let entry = input::prompt_entry(None)?;
    ledger.add(entry);
    print(ui, &badge(ui, Badge::Ok, "Entry added."));
    Ok(())
}
