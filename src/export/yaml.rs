//! YAML Export functionality
//!
//! Writes a dashboard snapshot to YAML for human reading.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::DashboardExport;
use crate::reports::Dashboard;

/// Export a dashboard snapshot as YAML
pub fn export_dashboard_yaml<W: Write>(
    dashboard: &Dashboard,
    transaction_count: usize,
    writer: &mut W,
) -> FinanceResult<()> {
    let export = DashboardExport::new(dashboard, transaction_count);

    writeln!(writer, "# fintrack dashboard export")
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
