//! Aggregation engine
//!
//! Read-only view over the ledger store that answers the dashboard's
//! questions. Each call takes a fresh snapshot of the store, so results always
//! reflect its contents at call time; nothing is cached between calls.

use crate::models::Money;
use crate::reports::{
    goal_progress, CategoryDistribution, Dashboard, LedgerSummary, MonthlySeries,
};
use crate::storage::LedgerStore;

/// Service computing derived metrics from the ledger
pub struct AggregationEngine<'a> {
    ledger: &'a LedgerStore,
}

impl<'a> AggregationEngine<'a> {
    /// Create a new aggregation engine over `ledger`
    pub fn new(ledger: &'a LedgerStore) -> Self {
        Self { ledger }
    }

    /// Income, expense, net savings and savings rate
    pub fn summarize(&self) -> LedgerSummary {
        LedgerSummary::generate(&self.ledger.all())
    }

    /// Net savings as a percentage of `goal`, clamped to `0..=100`
    pub fn goal_progress(&self, goal: Money) -> u8 {
        goal_progress(self.summarize().net_savings, goal)
    }

    /// Per-month income, expense and savings, oldest month first
    pub fn monthly_series(&self) -> MonthlySeries {
        MonthlySeries::generate(&self.ledger.all())
    }

    /// Expense totals per category
    pub fn category_distribution(&self) -> CategoryDistribution {
        CategoryDistribution::generate(&self.ledger.all())
    }

    /// Every report, computed from a single snapshot
    pub fn dashboard(&self, goal: Money) -> Dashboard {
        Dashboard::generate(&self.ledger.all(), goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, Transaction};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn goal() -> Money {
        Money::from_units(5000)
    }

    #[test]
    fn test_empty_ledger() {
        let store = LedgerStore::new();
        let engine = AggregationEngine::new(&store);

        let summary = engine.summarize();
        assert_eq!(summary.income_total, Money::zero());
        assert_eq!(summary.expense_total, Money::zero());
        assert_eq!(summary.net_savings, Money::zero());
        assert_eq!(summary.savings_rate_percent, 0.0);
        assert!(engine.monthly_series().is_empty());
        assert!(engine.category_distribution().is_empty());
        assert_eq!(engine.goal_progress(goal()), 0);
    }

    #[test]
    fn test_single_income_record() {
        let store = LedgerStore::new();
        store.append(Transaction::income(date(2024, 1, 15), "Salary", Money::from_units(1000)));
        let engine = AggregationEngine::new(&store);

        let summary = engine.summarize();
        assert_eq!(summary.income_total, Money::from_units(1000));
        assert_eq!(summary.expense_total, Money::zero());
        assert_eq!(summary.net_savings, Money::from_units(1000));
        assert_eq!(summary.savings_rate_percent, 100.0);

        let series = engine.monthly_series();
        assert_eq!(series.len(), 1);
        let row = series.rows()[0];
        assert_eq!(row.month, Month::new(2024, 1).unwrap());
        assert_eq!(row.income, Money::from_units(1000));
        assert_eq!(row.expense, Money::zero());
        assert_eq!(row.savings, Money::from_units(1000));
    }

    #[test]
    fn test_two_food_expenses() {
        let store = LedgerStore::new();
        store.append(Transaction::expense(date(2024, 3, 1), "Food", Money::from_units(100)));
        store.append(Transaction::expense(date(2024, 3, 20), "Food", Money::from_units(50)));
        let engine = AggregationEngine::new(&store);

        let dist = engine.category_distribution();
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.get("Food"), Some(Money::from_units(150)));
    }

    #[test]
    fn test_deficit_goal_progress() {
        let store = LedgerStore::with_transactions(vec![
            Transaction::income(date(2024, 1, 10), "Salary", Money::from_units(1000)),
            Transaction::expense(date(2024, 2, 10), "Bills", Money::from_units(1200)),
        ]);
        let engine = AggregationEngine::new(&store);

        assert_eq!(engine.summarize().net_savings, Money::from_units(-200));
        assert_eq!(engine.goal_progress(goal()), 0);
    }

    #[test]
    fn test_overshoot_goal_progress() {
        let store = LedgerStore::with_transactions(vec![
            Transaction::income(date(2024, 1, 10), "Salary", Money::from_units(12000)),
            Transaction::income(date(2024, 2, 10), "Salary", Money::from_units(8000)),
        ]);
        let engine = AggregationEngine::new(&store);

        assert_eq!(engine.summarize().income_total, Money::from_units(20000));
        assert_eq!(engine.goal_progress(goal()), 100);
    }

    #[test]
    fn test_reflects_mutations() {
        let store = LedgerStore::new();
        let engine = AggregationEngine::new(&store);
        assert_eq!(engine.summarize().income_total, Money::zero());

        store.append(Transaction::income(date(2024, 1, 1), "Salary", Money::from_units(10)));
        assert_eq!(engine.summarize().income_total, Money::from_units(10));

        store.replace(vec![Transaction::expense(
            date(2024, 1, 1),
            "Food",
            Money::from_units(3),
        )]);
        let summary = engine.summarize();
        assert_eq!(summary.income_total, Money::zero());
        assert_eq!(summary.expense_total, Money::from_units(3));
        assert_eq!(engine.monthly_series().len(), 1);
    }

    #[test]
    fn test_dashboard_matches_individual_calls() {
        let store = LedgerStore::with_transactions(vec![
            Transaction::income(date(2024, 1, 10), "Salary", Money::from_units(3000)),
            Transaction::expense(date(2024, 1, 11), "Food", Money::from_units(200)),
            Transaction::expense(date(2024, 2, 1), "Transport", Money::from_units(45)),
        ]);
        let engine = AggregationEngine::new(&store);
        let dashboard = engine.dashboard(goal());

        assert_eq!(dashboard.summary, engine.summarize());
        assert_eq!(dashboard.monthly, engine.monthly_series());
        assert_eq!(dashboard.categories, engine.category_distribution());
        assert_eq!(dashboard.goal.percent, engine.goal_progress(goal()));
    }
}
