//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use fintrack_core::CURRENCY_SUFFIX;

use super::mode::OutputMode;
use crate::helpers::OutputFormat;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
    /// Suffix printed after money amounts
    pub currency: String,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(
        json_flag: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb;
        let unicode = !ascii_flag;
        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::resolve(json_flag, format, is_tty, term_is_dumb);

        Self {
            is_tty,
            color,
            unicode,
            width,
            mode,
            currency: CURRENCY_SUFFIX.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Get terminal width, falling back to 80.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize struct.
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl succeeded, so the struct is initialized.
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
