//! Core data models for fintrack
//!
//! This module contains the data structures of the ledger domain: money
//! amounts, calendar months, and transactions.

pub mod money;
pub mod month;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use transaction::{Transaction, TransactionKind, EXPENSE_CATEGORIES, SALARY_CATEGORY};
