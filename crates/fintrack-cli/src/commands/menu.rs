//! Interactive menu loop.
//!
//! Picks a data file, then repeats: clear screen, framed title, action
//! picker, action. Action errors are reported and the loop continues;
//! Ctrl-C at the action picker ends the program.

use fintrack_core::Ledger;

use crate::app::AppContext;
use crate::constants::FAREWELL;
use crate::errors::{hint_for, is_interrupted, CliError};
use crate::helpers::input;
use crate::ui::{badge, banner, print, print_error, Badge, UiContext};

use super::entries::{add_interactive, delete_interactive, edit_interactive};
use super::files::export_interactive;
use super::reports::{chart_interactive, report_interactive, show_balance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Balance,
    Report,
    Chart,
    Export,
    Edit,
    Delete,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        Self::Add,
        Self::Balance,
        Self::Report,
        Self::Chart,
        Self::Export,
        Self::Edit,
        Self::Delete,
        Self::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add entry",
            Self::Balance => "Show balance",
            Self::Report => "Monthly report",
            Self::Chart => "Spending chart",
            Self::Export => "Export to CSV",
            Self::Edit => "Edit entry",
            Self::Delete => "Delete entry",
            Self::Exit => "Exit",
        }
    }

    /// Action for a picker result; backing out (`None`) exits.
    pub fn from_choice(choice: Option<usize>) -> Self {
        choice
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Self::Exit)
    }
}

/// Ledger plus the file it was loaded from, offered as the save default.
struct Session {
    ledger: Ledger,
    file: Option<String>,
}

impl Session {
    fn run(&mut self, ui: &UiContext, action: MenuAction) -> anyhow::Result<()> {
        match action {
            MenuAction::Add => add_interactive(ui, &mut self.ledger),
            MenuAction::Balance => {
                print(ui, &banner(ui, "Current balance"));
                show_balance(ui, &self.ledger)
            }
            MenuAction::Report => report_interactive(ui, &self.ledger),
            MenuAction::Chart => chart_interactive(ui, &self.ledger),
            MenuAction::Export => export_interactive(ui, &self.ledger),
            MenuAction::Edit => edit_interactive(ui, &mut self.ledger, self.file.as_deref()),
            MenuAction::Delete => delete_interactive(ui, &mut self.ledger, self.file.as_deref()),
            MenuAction::Exit => Ok(()),
        }
    }
}

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None)?;
    if !ui.is_interactive() {
        return Err(CliError::invalid_input(
            "The interactive menu needs a terminal; use a subcommand instead (see `fintrack --help`)",
        )
        .into());
    }

    input::clear_screen()?;
    let mut session = open_session(ctx, &ui)?;
    input::pause()?;

    let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();
    loop {
        input::clear_screen()?;
        print(&ui, &banner(&ui, "Personal finance tracker"));
        let action = MenuAction::from_choice(input::select_action(&labels)?);
        if action == MenuAction::Exit {
            print(&ui, "\nGoodbye!");
            print(&ui, &format!("\n{}", FAREWELL));
            return Ok(());
        }

        input::clear_screen()?;
        if let Err(err) = session.run(&ui, action) {
            if is_interrupted(&err) {
                print(&ui, "\nCancelled.");
            } else {
                tracing::debug!(action = ?action, error = %err, "menu action failed");
                print_error(&ui, &err.to_string(), hint_for(&err).as_deref());
            }
        }
        input::pause()?;
    }
}

/// Load `--file` when given, otherwise let the user pick from the data directory.
fn open_session(ctx: &AppContext, ui: &UiContext) -> anyhow::Result<Session> {
    let mut ledger = ctx.empty_ledger()?;

    let file = match ctx.source_file()? {
        Some(file) => Some(file),
        None => {
            let files = ledger.data_files()?;
            if files.is_empty() {
                print(ui, "No CSV files found. Starting with an empty ledger.");
                None
            } else {
                print(ui, &banner(ui, "Choose a data file"));
                input::select_data_file(&files)?
            }
        }
    };

    match file.as_deref() {
        Some(name) if ledger.resolve(name).exists() => {
            ledger.load(name)?;
            print(ui, &badge(ui, Badge::Ok, &format!("Data loaded from {}.", name)));
        }
        _ => print(ui, "\nWorking with a new data file."),
    }

    Ok(Session { ledger, file })
}
