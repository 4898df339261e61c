//! Output formatting for ledger data in json, plain, and pretty modes.

pub mod json;
pub mod text;

use fintrack_core::Entry;

use crate::ui::{blank_line, header, hint, print, UiContext};

/// Print the entry list in the mode `ctx` resolved to.
pub fn print_entry_list(ctx: &UiContext, entries: &[Entry], quiet: bool) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&json::entries_json(entries))?);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            print(ctx, "No entries.");
        }
        return Ok(());
    }

    if !quiet && ctx.mode.is_pretty() {
        print(ctx, &header(ctx, "list", Some(&format!("{} entries", entries.len()))));
        blank_line(ctx);
    }
    print(ctx, &text::entry_list(ctx, entries));
    if !quiet && ctx.mode.is_pretty() {
        blank_line(ctx);
        print(ctx, &hint(ctx, "fintrack edit <index> | fintrack delete <index>"));
    }
    Ok(())
}
