use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::Cli;
use crate::config::render_config;

pub fn handle_completions(shell: Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fintrack", &mut io::stdout());
    Ok(())
}

/// Print the effective configuration, prefixed by where it was read from.
pub fn handle_config(ctx: &AppContext) -> anyhow::Result<()> {
    let path = resolve_config_path()?;
    let rendered = render_config(ctx.config()?)?;
    if !ctx.quiet() {
        let status = if path.exists() { "" } else { " (not found, defaults)" };
        println!("# {}{}", path.display(), status);
    }
    print!("{}", rendered);
    Ok(())
}
