//! Transaction display formatting
//!
//! Renders the raw ledger as a table. This is a straight dump of every record
//! in insertion order, independent of any aggregation.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct LedgerRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl LedgerRow {
    fn new(txn: &Transaction, currency_symbol: &str) -> Self {
        Self {
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            category: txn.category.clone(),
            amount: txn.amount.format_with_symbol(currency_symbol),
            description: truncate(&txn.description, DESCRIPTION_WIDTH),
        }
    }
}

/// Format every transaction as a table
pub fn format_ledger_table(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| LedgerRow::new(txn, currency_symbol));

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!("{}\n{} transaction(s)\n", table, transactions.len())
}

/// Truncate a string to at most `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
