//! Application context for the Fintrack CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file so
//! handlers do not thread both through every call.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use fintrack_core::Ledger;

use crate::cli::Cli;
use crate::config::{load_config, TrackerConfig};
use crate::errors::CliError;
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

use super::resolver::{
    resolve_config_path, resolve_data_dir, resolve_destination, resolve_source_file,
};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TrackerConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&TrackerConfig> {
        self.config
            .get_or_try_init(|| load_config(&resolve_config_path()?))
    }

    /// UI context for one command's output.
    pub fn ui_context(
        &self,
        json: bool,
        format: Option<OutputFormat>,
    ) -> anyhow::Result<UiContext> {
        let ctx = UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii);
        Ok(ctx.with_currency(&self.config()?.ui.currency))
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_data_dir(self.cli, self.config()?))
    }

    /// Data file named by `--file` or the config, with `.csv` appended.
    pub fn source_file(&self) -> anyhow::Result<Option<String>> {
        Ok(resolve_source_file(self.cli, self.config()?))
    }

    /// File a mutating command writes to.
    pub fn destination(&self, save: Option<&str>) -> anyhow::Result<String> {
        resolve_destination(save, self.cli, self.config()?)
    }

    /// Empty ledger rooted at the data directory.
    pub fn empty_ledger(&self) -> anyhow::Result<Ledger> {
        Ok(Ledger::new(self.data_dir()?))
    }

    /// Ledger loaded from the source file.
    ///
    /// With `allow_missing`, an unset or nonexistent source file yields an
    /// empty ledger instead of an error.
    pub fn open_ledger(&self, allow_missing: bool) -> anyhow::Result<Ledger> {
        let mut ledger = self.empty_ledger()?;
        let Some(file) = self.source_file()? else {
            if allow_missing {
                return Ok(ledger);
            }
            return Err(CliError::not_found(
                "No data file selected",
                "Pass --file <NAME> (see `fintrack files`) or set storage.default_file in the config.",
            )
            .into());
        };

        if allow_missing && !ledger.resolve(&file).exists() {
            tracing::debug!(file = %file, "data file does not exist yet, starting empty");
            return Ok(ledger);
        }
        ledger.load(&file)?;
        Ok(ledger)
    }
}
