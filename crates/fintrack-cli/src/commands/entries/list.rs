use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::print_entry_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, format)?;
    let ledger = ctx.open_ledger(false)?;
    print_entry_list(&ui, ledger.entries(), ctx.quiet())
}
