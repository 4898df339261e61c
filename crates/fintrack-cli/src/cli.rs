use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use fintrack_core::VERSION;

/// Fintrack - a CLI-first personal finance ledger backed by CSV files
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data file to load first (resolved inside the data directory)
    #[arg(short, long, global = true, env = "FINTRACK_FILE")]
    pub file: Option<String>,

    /// Directory holding CSV data files
    #[arg(long, global = true, env = "FINTRACK_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Entry values shared by `add` and `edit`. Missing values are prompted for.
#[derive(Args)]
pub struct EntryFields {
    /// Amount (decimal number)
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: Option<String>,

    /// Category label
    #[arg(value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Entry type (income or expense)
    #[arg(value_name = "TYPE")]
    pub kind: Option<String>,
}

impl EntryFields {
    /// True when every value was given on the command line.
    pub fn is_complete(&self) -> bool {
        self.amount.is_some()
            && self.category.is_some()
            && self.date.is_some()
            && self.kind.is_some()
    }
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: EntryFields,

    /// File to save the ledger to (defaults to --file)
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Zero-based position of the entry (see `fintrack list`)
    #[arg(value_name = "INDEX")]
    pub index: usize,

    #[command(flatten)]
    pub fields: EntryFields,

    /// File to save the ledger to (defaults to --file)
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Zero-based position of the entry (see `fintrack list`)
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// File to save the ledger to (defaults to --file)
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `balance` command
#[derive(Args)]
pub struct BalanceArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    /// Month (1-12)
    #[arg(value_name = "MONTH")]
    pub month: Option<u32>,

    /// Year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `chart` command
#[derive(Args)]
pub struct ChartArgs {
    /// Output the category totals as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output file name (defaults to transactions_<date>.csv)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `files` command
#[derive(Args)]
pub struct FilesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Add an entry and save the ledger
    Add(AddArgs),

    /// List entries with their positions
    List(ListArgs),

    /// Show the current balance
    Balance(BalanceArgs),

    /// Show the entries and totals of one month
    Report(ReportArgs),

    /// Chart expense totals per category
    Chart(ChartArgs),

    /// Export all entries to a CSV file in the data directory
    Export(ExportArgs),

    /// Replace the entry at a position and save the ledger
    Edit(EditArgs),

    /// Delete the entry at a position and save the ledger
    Delete(DeleteArgs),

    /// List CSV files in the data directory
    Files(FilesArgs),

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_accepts_negative_amount() {
        let cli = Cli::try_parse_from(["fintrack", "add", "-5", "Refund", "2023-10-01", "income"])
            .expect("parse");
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.fields.amount.as_deref(), Some("-5"));
                assert!(args.fields.is_complete());
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_global_file_after_subcommand() {
        let cli =
            Cli::try_parse_from(["fintrack", "balance", "--file", "data.csv"]).expect("parse");
        assert_eq!(cli.file.as_deref(), Some("data.csv"));
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["fintrack", "-vv", "list"]).expect("parse");
        assert_eq!(cli.verbose, 2);
    }
}
