//! UI primitives for the Fintrack CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode, currency)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, `owo-colors` styles, symbols
//! - **Render**: Tables, headers, banners, receipts, hints
//! - **Format**: String and money utilities
//! - **Chart**: Terminal bar chart for spending by category
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, Badge};
//! use crate::ui::render::{header, table, hint};
//!
//! let ctx = UiContext::from_env(args.json, format, cli.no_color, cli.ascii);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "list", Some("data.csv")));
//! println!("{}", table(&ctx, &columns, &rows));
//! println!("{}", hint(&ctx, "fintrack edit <index>"));
//! ```

pub mod chart;
mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use chart::TerminalBarChart;
pub use context::UiContext;
pub use theme::Badge;

pub use render::{
    badge, banner, blank_line, divider, header, hint, kv, print, print_error, receipt, table,
    Column,
};
