//! Export module for fintrack
//!
//! Provides export of the current session in multiple formats:
//! - CSV: the ledger in the same layout the importer reads
//! - JSON: machine-readable dashboard snapshot
//! - YAML: human-readable dashboard snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_ledger_csv;
pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_dashboard_yaml;
