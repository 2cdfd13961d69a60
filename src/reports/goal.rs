//! Savings goal progress
//!
//! Measures cumulative net savings against a single target amount.

use serde::Serialize;

use crate::display::report::format_bar;
use crate::models::Money;

use super::summary::LedgerSummary;

const BAR_WIDTH: usize = 40;

/// Net savings as a whole percentage of `goal`, clamped to `0..=100`
///
/// The ratio is truncated toward zero before clamping, so deficits report 0
/// and overshooting the goal reports 100. A non-positive goal reports 0.
pub fn goal_progress(net_savings: Money, goal: Money) -> u8 {
    if !goal.is_positive() {
        return 0;
    }

    let raw = i128::from(net_savings.cents()) * 100 / i128::from(goal.cents());
    raw.clamp(0, 100) as u8
}

/// Progress toward the savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    /// Target amount
    pub goal: Money,
    /// Cumulative net savings measured against the goal
    pub net_savings: Money,
    /// Whole percentage in `0..=100`
    pub percent: u8,
    /// Amount still needed; zero once the goal is met
    pub remaining: Money,
}

impl GoalProgress {
    /// Build from an already computed summary
    pub fn from_summary(summary: &LedgerSummary, goal: Money) -> Self {
        let net_savings = summary.net_savings;
        let remaining = if net_savings >= goal {
            Money::zero()
        } else {
            goal - net_savings
        };

        Self {
            goal,
            net_savings,
            percent: goal_progress(net_savings, goal),
            remaining,
        }
    }

    pub fn is_reached(&self) -> bool {
        self.goal.is_positive() && self.net_savings >= self.goal
    }

    /// Format the progress bar for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Savings Goal Progress: {} of {}\n",
            self.net_savings.format_with_symbol(currency_symbol),
            self.goal.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "[{}] {:>3}%\n",
            format_bar(f64::from(self.percent), 100.0, BAR_WIDTH),
            self.percent
        ));
        if self.is_reached() {
            output.push_str("Goal reached!\n");
        } else {
            output.push_str(&format!(
                "Remaining: {}\n",
                self.remaining.format_with_symbol(currency_symbol)
            ));
        }
        output
    }
}
