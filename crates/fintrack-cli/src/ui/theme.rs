//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    /// Get the appropriate symbol based on unicode flag.
    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub mod symbols {
    use super::SymbolPair;

    /// One cell of a chart bar.
    pub const BAR: SymbolPair = SymbolPair::new("#", "\u{2588}");
    /// Separator between a chart label and its bar.
    pub const AXIS: SymbolPair = SymbolPair::new("|", "\u{2502}");
    /// Horizontal rule.
    pub const RULE: SymbolPair = SymbolPair::new("-", "\u{2500}");
}

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Err => styles::error(),
        }
    }
}

/// Named styles for the palette.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn error() -> Style {
        Style::new().red()
    }

    /// Income amounts.
    pub fn income() -> Style {
        Style::new().green()
    }

    /// Expense amounts.
    pub fn expense() -> Style {
        Style::new().red()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
