//! Transaction model
//!
//! A transaction is one dated, typed, categorized monetary entry. The amount is
//! always a non-negative magnitude; whether it is a credit or a debit comes only
//! from its [`TransactionKind`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Conventional category label for income
pub const SALARY_CATEGORY: &str = "Salary";

/// Recommended expense categories. Any other label is accepted as-is.
pub const EXPENSE_CATEGORIES: [&str; 5] = ["Food", "Transport", "Entertainment", "Bills", "Other"];

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!(
                "Invalid transaction type: '{}' (expected Income or Expense)",
                s.trim()
            )),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date, no time component
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TransactionKind,

    /// Free-form label; casing is significant
    pub category: String,

    /// Non-negative magnitude
    pub amount: Money,

    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction with an empty description
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            kind,
            category: category.into(),
            amount,
            description: String::new(),
        }
    }

    /// Shorthand for an income entry
    pub fn income(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self::new(date, TransactionKind::Income, category, amount)
    }

    /// Shorthand for an expense entry
    pub fn expense(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self::new(date, TransactionKind::Expense, category, amount)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}
