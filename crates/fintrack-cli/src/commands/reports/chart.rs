use std::io;

use fintrack_core::Ledger;

use crate::app::AppContext;
use crate::cli::ChartArgs;
use crate::output::json;
use crate::ui::{banner, print, TerminalBarChart, UiContext};

pub fn handle_chart(ctx: &AppContext, args: &ChartArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None)?;
    let ledger = ctx.open_ledger(false)?;

    if ui.mode.is_json() {
        let totals = ledger.spending_by_category();
        println!("{}", serde_json::to_string_pretty(&json::chart_json(&totals))?);
        return Ok(());
    }
    draw(&ui, &ledger)
}

/// Menu action.
pub fn chart_interactive(ui: &UiContext, ledger: &Ledger) -> anyhow::Result<()> {
    print(ui, &banner(ui, "Spending analysis"));
    draw(ui, ledger)
}

fn draw(ui: &UiContext, ledger: &Ledger) -> anyhow::Result<()> {
    let mut chart = TerminalBarChart::new(io::stdout().lock(), ui);
    ledger.plot_spending_by_category(&mut chart)?;
    Ok(())
}
