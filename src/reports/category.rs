//! Category Report
//!
//! Expense totals per category label. Income never contributes, and labels
//! are compared exactly, so "food" and "Food" are separate categories.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::display::report::{format_bar, format_percentage};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction};

const BAR_WIDTH: usize = 30;

/// One category's slice of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare<'a> {
    pub category: &'a str,
    pub amount: Money,
    /// Percentage of total expenses
    pub percentage: f64,
}

/// Expense totals keyed by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryDistribution {
    totals: BTreeMap<String, Money>,
}

impl CategoryDistribution {
    /// Generate the distribution for a set of transactions
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut totals: BTreeMap<String, Money> = BTreeMap::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            *totals.entry(txn.category.clone()).or_default() += txn.amount;
        }

        Self { totals }
    }

    /// Total for a category, if any expense used that exact label
    pub fn get(&self, category: &str) -> Option<Money> {
        self.totals.get(category).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Categories in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> + '_ {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of every category; equals the ledger's expense total
    pub fn total(&self) -> Money {
        self.totals.values().sum()
    }

    /// Shares sorted by amount, largest first (ties by label)
    pub fn shares(&self) -> Vec<CategoryShare<'_>> {
        let total = self.total();
        let mut shares: Vec<_> = self
            .iter()
            .map(|(category, amount)| CategoryShare {
                category,
                amount,
                percentage: amount.percent_of(total),
            })
            .collect();

        shares.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(b.category)));
        shares
    }

    /// Format the distribution as a bar chart for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Expense Distribution\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        for share in self.shares() {
            output.push_str(&format!(
                "{:<16} {:>14} {:>6} {}\n",
                share.category,
                share.amount.format_with_symbol(currency_symbol),
                format_percentage(share.percentage),
                format_bar(share.percentage, 100.0, BAR_WIDTH)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Total",
            self.total().format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the distribution to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(["Category", "Amount", "Percentage"])?;

        for share in self.shares() {
            out.write_record([
                share.category.to_string(),
                share.amount.to_decimal_string(),
                format!("{:.2}", share.percentage),
            ])?;
        }

        out.flush()
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}
