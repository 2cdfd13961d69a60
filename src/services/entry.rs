//! Manual entry
//!
//! Turns raw form fields into a validated transaction. Nothing reaches the
//! ledger until every field parses.

use csv::{ReaderBuilder, Trim};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Transaction, TransactionKind};

use super::import::{parse_amount, parse_category, parse_date};

/// Unvalidated input for a new transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInput {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl TransactionInput {
    /// Parse `DATE,TYPE,CATEGORY,AMOUNT[,DESCRIPTION]`
    ///
    /// Fields follow CSV quoting rules, so an amount with a thousands
    /// separator or a description containing commas must be quoted.
    pub fn parse_line(line: &str) -> FinanceResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(line.as_bytes());

        let record = reader
            .records()
            .next()
            .transpose()?
            .ok_or_else(|| FinanceError::Validation("Entry is empty".into()))?;

        if record.len() < 4 || record.len() > 5 {
            return Err(FinanceError::Validation(format!(
                "Expected DATE,TYPE,CATEGORY,AMOUNT[,DESCRIPTION], got {} field(s): '{}'",
                record.len(),
                line.trim()
            )));
        }

        let get = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        Ok(Self {
            date: get(0),
            kind: get(1),
            category: get(2),
            amount: get(3),
            description: get(4),
        })
    }

    /// Validate every field and build the transaction
    pub fn validate(&self, date_format: &str) -> FinanceResult<Transaction> {
        let date = parse_date(&self.date, date_format).map_err(FinanceError::Validation)?;
        let kind: TransactionKind = self.kind.parse().map_err(FinanceError::Validation)?;
        let category = parse_category(&self.category).map_err(FinanceError::Validation)?;
        let amount = parse_amount(&self.amount).map_err(FinanceError::Validation)?;

        Ok(Transaction::new(date, kind, category, amount)
            .with_description(self.description.trim()))
    }
}
