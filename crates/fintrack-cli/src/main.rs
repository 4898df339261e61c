//! Fintrack CLI - a personal finance ledger backed by CSV files
//!
//! This is the command-line interface for Fintrack. It provides both an
//! interactive menu and scriptable subcommands over the core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::constants::{exit_codes, FAREWELL};
use crate::errors::{exit_code, hint_for, is_interrupted};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = AppContext::new(&cli);
    if let Err(err) = run(&ctx) {
        if is_interrupted(&err) {
            println!("\nProgram terminated by user.");
            println!("\n{}", FAREWELL);
            std::process::exit(exit_codes::INTERRUPTED);
        }

        tracing::debug!(error = ?err, "command failed");
        let ui = UiContext::from_env(false, None, cli.no_color, cli.ascii);
        print_error(&ui, &format!("{:#}", err), hint_for(&err).as_deref());
        std::process::exit(exit_code(&err));
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        None | Some(Commands::Menu) => commands::handle_menu(ctx),
        Some(Commands::Add(args)) => commands::handle_add(ctx, args),
        Some(Commands::List(args)) => commands::handle_list(ctx, args),
        Some(Commands::Balance(args)) => commands::handle_balance(ctx, args),
        Some(Commands::Report(args)) => commands::handle_report(ctx, args),
        Some(Commands::Chart(args)) => commands::handle_chart(ctx, args),
        Some(Commands::Export(args)) => commands::handle_export(ctx, args),
        Some(Commands::Edit(args)) => commands::handle_edit(ctx, args),
        Some(Commands::Delete(args)) => commands::handle_delete(ctx, args),
        Some(Commands::Files(args)) => commands::handle_files(ctx, args),
        Some(Commands::Config) => commands::handle_config(ctx),
        Some(Commands::Completions(args)) => commands::handle_completions(args.shell),
    }
}
