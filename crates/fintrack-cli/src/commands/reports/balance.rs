use fintrack_core::Ledger;

use crate::app::AppContext;
use crate::cli::BalanceArgs;
use crate::output::{json, text};
use crate::ui::{print, UiContext};

pub fn handle_balance(ctx: &AppContext, args: &BalanceArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None)?;
    let ledger = ctx.open_ledger(false)?;
    show_balance(&ui, &ledger)
}

pub fn show_balance(ui: &UiContext, ledger: &Ledger) -> anyhow::Result<()> {
    let balance = ledger.balance();
    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&json::balance_json(balance, &ui.currency))?
        );
        return Ok(());
    }
    print(ui, &text::balance(ui, balance));
    Ok(())
}
