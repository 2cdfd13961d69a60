//! CLI commands for configuration

use crate::config::{FinancePaths, Settings};
use crate::error::FinanceResult;
use crate::models::{EXPENSE_CATEGORIES, SALARY_CATEGORY};

/// One line listing the conventional category labels
pub fn suggested_categories() -> String {
    format!(
        "income: {}; expenses: {}",
        SALARY_CATEGORY,
        EXPENSE_CATEGORIES.join(", ")
    )
}

/// Write the current settings (defaults on first run) to the config file
pub fn handle_init_command(paths: &FinancePaths, settings: &Settings) -> FinanceResult<()> {
    let existed = paths.is_initialized();
    settings.save(paths)?;

    if existed {
        println!("Settings rewritten at: {}", paths.settings_file().display());
    } else {
        println!("Initialized fintrack at: {}", paths.base_dir().display());
    }
    println!();
    println!(
        "Savings goal: {}",
        settings
            .savings_goal
            .format_with_symbol(&settings.currency_symbol)
    );
    println!(
        "Edit {} to change the goal or budgets.",
        paths.settings_file().display()
    );
    Ok(())
}

/// Print paths and settings
pub fn handle_config_command(paths: &FinancePaths, settings: &Settings) -> FinanceResult<()> {
    let symbol = &settings.currency_symbol;

    println!("fintrack Configuration");
    println!("======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() {
            ""
        } else {
            " (not created, using defaults)"
        }
    );
    println!();
    println!("Settings:");
    println!(
        "  Savings goal:    {}",
        settings.savings_goal.format_with_symbol(symbol)
    );
    println!("  Currency symbol: {}", symbol);
    println!("  Date format:     {}", settings.date_format);
    println!();
    println!("Suggested categories ({})", suggested_categories());
    println!("  Any other label is accepted as written.");
    println!();
    println!("Monthly budgets (informational):");
    for (category, cap) in &settings.budgets {
        println!("  {:<14} {:>12}", category, cap.format_with_symbol(symbol));
    }
    Ok(())
}
