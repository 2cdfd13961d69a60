//! Summary Report
//!
//! Whole-ledger totals: income, expense, net savings and savings rate.

use serde::Serialize;

use crate::display::report::{format_card, format_rate};
use crate::models::{Money, Transaction, TransactionKind};

/// Totals across the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LedgerSummary {
    /// Sum of income amounts
    pub income_total: Money,
    /// Sum of expense amounts
    pub expense_total: Money,
    /// Income minus expense; may be negative
    pub net_savings: Money,
    /// Net savings as a percentage of income, 0 when there is no income
    pub savings_rate_percent: f64,
}

impl LedgerSummary {
    /// Generate the summary for a set of transactions
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut income_total = Money::zero();
        let mut expense_total = Money::zero();

        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => income_total += txn.amount,
                TransactionKind::Expense => expense_total += txn.amount,
            }
        }

        let net_savings = income_total - expense_total;
        let savings_rate_percent = if income_total.is_positive() {
            net_savings.percent_of(income_total)
        } else {
            0.0
        };

        Self {
            income_total,
            expense_total,
            net_savings,
            savings_rate_percent,
        }
    }

    /// Format the four dashboard cards for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let cards = [
            format_card("Income", &self.income_total.format_with_symbol(currency_symbol)),
            format_card("Expenses", &self.expense_total.format_with_symbol(currency_symbol)),
            format_card("Savings", &self.net_savings.format_with_symbol(currency_symbol)),
            format_card("Savings Rate", &format_rate(self.savings_rate_percent)),
        ];

        let mut output = String::new();
        for card in cards {
            output.push_str(&card);
            output.push('\n');
        }
        output
    }
}
