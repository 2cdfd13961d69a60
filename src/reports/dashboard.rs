//! Dashboard
//!
//! The full recomputation pass: summary, monthly series, category
//! distribution, then goal progress, all from the same set of transactions.

use serde::Serialize;

use crate::models::{Money, Transaction};

use super::category::CategoryDistribution;
use super::goal::GoalProgress;
use super::monthly::MonthlySeries;
use super::summary::LedgerSummary;

/// Everything the presentation layer needs after a ledger mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: LedgerSummary,
    pub monthly: MonthlySeries,
    pub categories: CategoryDistribution,
    pub goal: GoalProgress,
}

impl Dashboard {
    /// Recompute every report from scratch
    pub fn generate(transactions: &[Transaction], savings_goal: Money) -> Self {
        let summary = LedgerSummary::generate(transactions);
        let monthly = MonthlySeries::generate(transactions);
        let categories = CategoryDistribution::generate(transactions);
        let goal = GoalProgress::from_summary(&summary, savings_goal);

        Self {
            summary,
            monthly,
            categories,
            goal,
        }
    }

    /// Format the whole dashboard for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let sections = [
            self.summary.format_terminal(currency_symbol),
            self.goal.format_terminal(currency_symbol),
            self.monthly.format_terminal(currency_symbol),
            self.categories.format_terminal(currency_symbol),
        ];
        sections.join("\n")
    }
}
