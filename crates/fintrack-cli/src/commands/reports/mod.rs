//! Read-only views over the ledger: balance, monthly report, spending chart.

mod balance;
mod chart;
mod monthly;

pub use balance::{handle_balance, show_balance};
pub use chart::{chart_interactive, handle_chart};
pub use monthly::{handle_report, report_interactive};
