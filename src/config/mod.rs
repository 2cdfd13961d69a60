//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence (savings goal, budgets, display preferences)

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
