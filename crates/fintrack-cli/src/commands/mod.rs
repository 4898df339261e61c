//! Command handlers.

pub mod entries;
pub mod files;
pub mod menu;
pub mod misc;
pub mod reports;

pub use entries::{handle_add, handle_delete, handle_edit, handle_list};
pub use files::{handle_export, handle_files};
pub use menu::handle_menu;
pub use misc::{handle_completions, handle_config};
pub use reports::{handle_balance, handle_chart, handle_report};
