//! CSV Export functionality
//!
//! Writes the ledger in the layout the importer reads, so an exported file
//! can be loaded back unchanged.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;
use crate::services::LEDGER_HEADERS;

/// Export transactions to CSV
pub fn export_ledger_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FinanceResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(LEDGER_HEADERS)?;

    for txn in transactions {
        out.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.amount.to_decimal_string(),
            txn.description.clone(),
        ])?;
    }

    out.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}
