//! Monthly Report
//!
//! Income, expense and savings per calendar month, in chronological order.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Month, Transaction, TransactionKind};

/// Totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyRow {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
    /// That month's income minus that month's expense
    pub savings: Money,
}

/// One row per month that has at least one transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MonthlySeries {
    rows: Vec<MonthlyRow>,
}

impl MonthlySeries {
    /// Generate the series for a set of transactions
    pub fn generate(transactions: &[Transaction]) -> Self {
        // month -> (income, expense)
        let mut totals: BTreeMap<Month, (Money, Money)> = BTreeMap::new();

        for txn in transactions {
            let entry = totals
                .entry(Month::of(txn.date))
                .or_insert((Money::zero(), Money::zero()));
            match txn.kind {
                TransactionKind::Income => entry.0 += txn.amount,
                TransactionKind::Expense => entry.1 += txn.amount,
            }
        }

        let rows = totals
            .into_iter()
            .map(|(month, (income, expense))| MonthlyRow {
                month,
                income,
                expense,
                savings: income - expense,
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[MonthlyRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Find the row for a month
    pub fn get(&self, month: Month) -> Option<&MonthlyRow> {
        self.rows
            .binary_search_by(|row| row.month.cmp(&month))
            .ok()
            .map(|idx| &self.rows[idx])
    }

    pub fn total_income(&self) -> Money {
        self.rows.iter().map(|r| r.income).sum()
    }

    pub fn total_expense(&self) -> Money {
        self.rows.iter().map(|r| r.expense).sum()
    }

    /// Format the series as a table for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Income vs Expenses\n");
        output.push_str(&"=".repeat(56));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No transactions recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<8} {:>15} {:>15} {:>15}\n",
            "Month", "Income", "Expense", "Savings"
        ));
        output.push_str(&"-".repeat(56));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<8} {:>15} {:>15} {:>15}\n",
                row.month,
                row.income.format_with_symbol(currency_symbol),
                row.expense.format_with_symbol(currency_symbol),
                row.savings.format_with_symbol(currency_symbol)
            ));
        }

        output
    }

    /// Export the series to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(["Month", "Income", "Expense", "Savings"])?;

        for row in &self.rows {
            out.write_record([
                row.month.to_string(),
                row.income.to_decimal_string(),
                row.expense.to_decimal_string(),
                row.savings.to_decimal_string(),
            ])?;
        }

        out.flush()
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn month(year: i32, month: u32) -> Month {
        Month::new(year, month).unwrap()
    }

    #[test]
    fn test_empty_ledger() {
        let series = MonthlySeries::generate(&[]);
        assert!(series.is_empty());
        assert_eq!(series.total_income(), Money::zero());
    }

    #[test]
    fn test_single_income_month() {
        let txns = [Transaction::income(date(2024, 1, 10), "Salary", Money::from_units(1000))];
        let series = MonthlySeries::generate(&txns);

        assert_eq!(
            series.rows(),
            &[MonthlyRow {
                month: month(2024, 1),
                income: Money::from_units(1000),
                expense: Money::zero(),
                savings: Money::from_units(1000),
            }]
        );
    }

    #[test]
    fn test_sorted_and_unique_regardless_of_input_order() {
        let txns = [
            Transaction::expense(date(2024, 3, 2), "Food", Money::from_units(30)),
            Transaction::income(date(2023, 12, 31), "Salary", Money::from_units(100)),
            Transaction::expense(date(2024, 1, 15), "Bills", Money::from_units(70)),
            Transaction::income(date(2024, 3, 28), "Salary", Money::from_units(500)),
            Transaction::expense(date(2024, 1, 1), "Food", Money::from_units(5)),
        ];
        let series = MonthlySeries::generate(&txns);

        let months: Vec<_> = series.rows().iter().map(|r| r.month).collect();
        assert_eq!(months, vec![month(2023, 12), month(2024, 1), month(2024, 3)]);
        assert!(months.windows(2).all(|w| w[0] < w[1]));

        let jan = series.get(month(2024, 1)).unwrap();
        assert_eq!(jan.income, Money::zero());
        assert_eq!(jan.expense, Money::from_units(75));
        assert_eq!(jan.savings, Money::from_units(-75));

        let mar = series.get(month(2024, 3)).unwrap();
        assert_eq!(mar.savings, Money::from_units(470));

        assert!(series.get(month(2024, 2)).is_none());
    }

    #[test]
    fn test_same_month_different_years_are_distinct() {
        let txns = [
            Transaction::income(date(2023, 5, 1), "Salary", Money::from_units(1)),
            Transaction::income(date(2024, 5, 1), "Salary", Money::from_units(2)),
        ];
        assert_eq!(MonthlySeries::generate(&txns).len(), 2);
    }

    #[test]
    fn test_totals_match_inputs() {
        let txns = [
            Transaction::income(date(2024, 1, 1), "Salary", Money::from_cents(123_45)),
            Transaction::income(date(2024, 2, 1), "Salary", Money::from_cents(678_90)),
            Transaction::expense(date(2024, 2, 2), "Food", Money::from_cents(11_11)),
        ];
        let series = MonthlySeries::generate(&txns);
        assert_eq!(series.total_income(), Money::from_cents(802_35));
        assert_eq!(series.total_expense(), Money::from_cents(11_11));
    }

    #[test]
    fn test_format_terminal() {
        let txns = [Transaction::income(date(2024, 1, 10), "Salary", Money::from_units(1000))];
        let output = MonthlySeries::generate(&txns).format_terminal("$");
        assert!(output.contains("2024-01"));
        assert!(output.contains("$1,000.00"));

        let empty = MonthlySeries::default().format_terminal("$");
        assert!(empty.contains("No transactions recorded."));
    }

    #[test]
    fn test_export_csv() {
        let txns = [
            Transaction::income(date(2024, 1, 10), "Salary", Money::from_units(1000)),
            Transaction::expense(date(2024, 2, 10), "Food", Money::from_cents(1250)),
        ];
        let mut buffer = Vec::new();
        MonthlySeries::generate(&txns).export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(
            csv,
            "Month,Income,Expense,Savings\n\
             2024-01,1000.00,0.00,1000.00\n\
             2024-02,0.00,12.50,-12.50\n"
        );
    }
}
