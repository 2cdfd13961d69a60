//! JSON Export functionality
//!
//! Writes a dashboard snapshot to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::reports::Dashboard;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard snapshot with export metadata
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Number of transactions behind the figures
    pub transaction_count: usize,

    #[serde(flatten)]
    pub dashboard: &'a Dashboard,
}

impl<'a> DashboardExport<'a> {
    pub fn new(dashboard: &'a Dashboard, transaction_count: usize) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            transaction_count,
            dashboard,
        }
    }
}

/// Export a dashboard snapshot as pretty-printed JSON
pub fn export_dashboard_json<W: Write>(
    dashboard: &Dashboard,
    transaction_count: usize,
    writer: &mut W,
) -> FinanceResult<()> {
    let export = DashboardExport::new(dashboard, transaction_count);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}
