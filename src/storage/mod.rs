//! Storage layer for fintrack
//!
//! The ledger lives only in memory for the length of a session; nothing here
//! touches the filesystem.

pub mod ledger;

pub use ledger::LedgerStore;
