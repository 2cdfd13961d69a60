//! Service layer for fintrack
//!
//! The service layer sits on either side of the ledger store: ingestion
//! validates records on the way in, and the aggregation engine derives
//! metrics on the way out.

pub mod aggregation;
pub mod entry;
pub mod import;

pub use aggregation::AggregationEngine;
pub use entry::TransactionInput;
pub use import::{ColumnMapping, ImportReport, ImportService, RowError, LEDGER_HEADERS};
