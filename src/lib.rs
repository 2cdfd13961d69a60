//! fintrack - personal finance dashboard
//!
//! This library holds the core of the fintrack application: an in-memory
//! ledger of income and expense records and the aggregation engine that turns
//! it into a savings dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, months, transactions)
//! - `storage`: The in-memory ledger store
//! - `reports`: Pure aggregations over a slice of transactions
//! - `services`: Ingestion (CSV import, manual entry) and the aggregation engine
//! - `session`: Settings plus ledger; recomputes the dashboard after each mutation
//! - `display`: Terminal formatting helpers
//! - `export`: JSON, YAML and CSV export
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the `fintrack` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use fintrack::config::Settings;
//! use fintrack::session::Session;
//!
//! let session = Session::new(Settings::default());
//! let dashboard = session
//!     .add_entry("2024-01-05,Income,Salary,1000")
//!     .unwrap();
//! assert_eq!(dashboard.goal.percent, 20);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
