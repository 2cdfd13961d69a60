//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data and reports for terminal
//! display: tables, cards, percentages and text bars.

pub mod report;
pub mod transaction;

pub use report::{format_bar, format_card, format_percentage, format_rate};
pub use transaction::format_ledger_table;
