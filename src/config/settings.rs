//! User settings for fintrack
//!
//! Holds the savings goal, display preferences, and the per-category monthly
//! budgets. Budgets are configuration only: they are loaded and shown, but no
//! report reads them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::{Money, EXPENSE_CATEGORIES};

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Target for cumulative net savings; must be positive
    #[serde(default = "default_savings_goal")]
    pub savings_goal: Money,

    /// Monthly cap per category (not enforced)
    #[serde(default = "default_budgets")]
    pub budgets: BTreeMap<String, Money>,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format tried first when parsing input (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_savings_goal() -> Money {
    Money::from_units(5000)
}

/// Monthly caps, in the same order as `EXPENSE_CATEGORIES`
const DEFAULT_BUDGET_CAPS: [i64; 5] = [500, 300, 300, 1000, 400];

fn default_budgets() -> BTreeMap<String, Money> {
    EXPENSE_CATEGORIES
        .iter()
        .zip(DEFAULT_BUDGET_CAPS)
        .map(|(category, cap)| (category.to_string(), Money::from_units(cap)))
        .collect()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            savings_goal: default_savings_goal(),
            budgets: default_budgets(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Replace the savings goal, rejecting zero or negative targets
    pub fn with_savings_goal(mut self, goal: Money) -> Result<Self, FinanceError> {
        self.savings_goal = goal;
        self.validate()?;
        Ok(self)
    }

    /// Budget cap for a category, if one is configured
    pub fn budget_for(&self, category: &str) -> Option<Money> {
        self.budgets.get(category).copied()
    }

    fn validate(&self) -> Result<(), FinanceError> {
        if !self.savings_goal.is_positive() {
            return Err(FinanceError::Config(format!(
                "Savings goal must be positive, got {}",
                self.savings_goal
            )));
        }
        if let Some((category, _)) = self.budgets.iter().find(|(_, cap)| cap.is_negative()) {
            return Err(FinanceError::Config(format!(
                "Budget for '{}' must not be negative",
                category
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.savings_goal, Money::from_units(5000));
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.budgets.len(), 5);
        assert_eq!(settings.budget_for("Bills"), Some(Money::from_units(1000)));
        assert_eq!(settings.budget_for("Food"), Some(Money::from_units(500)));
        assert_eq!(settings.budget_for("Transport"), Some(Money::from_units(300)));
        assert_eq!(settings.budget_for("Entertainment"), Some(Money::from_units(300)));
        assert_eq!(settings.budget_for("Other"), Some(Money::from_units(400)));
        assert_eq!(settings.budget_for("Salary"), None);
        assert!(EXPENSE_CATEGORIES
            .iter()
            .all(|category| settings.budget_for(category).is_some()));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default()
            .with_savings_goal(Money::from_units(12000))
            .unwrap();
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.savings_goal, Money::from_units(12000));
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.budgets, settings.budgets);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"savings_goal": 2500}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.savings_goal, Money::from_units(2500));
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert_eq!(loaded.budgets.len(), 5);
    }

    #[test]
    fn test_rejects_non_positive_goal() {
        assert!(Settings::default().with_savings_goal(Money::zero()).is_err());

        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"savings_goal": "-10"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinanceError::Config(_)));
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        assert!(Settings::load_or_create(&paths).is_err());
    }
}
