//! Input and parsing helper functions for the CLI.

pub mod input;
mod parsing;

pub use parsing::{default_export_name, ensure_csv_extension, parse_output_format, OutputFormat};
