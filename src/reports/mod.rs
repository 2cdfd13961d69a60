//! Reports module for fintrack
//!
//! Pure aggregation over a slice of transactions: whole-ledger summary,
//! savings goal progress, monthly series and expense distribution. Every
//! report is total over its input, including an empty ledger.

pub mod category;
pub mod dashboard;
pub mod goal;
pub mod monthly;
pub mod summary;

pub use category::{CategoryDistribution, CategoryShare};
pub use dashboard::Dashboard;
pub use goal::{goal_progress, GoalProgress};
pub use monthly::{MonthlyRow, MonthlySeries};
pub use summary::LedgerSummary;
