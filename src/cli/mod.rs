//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session.

pub mod config;
pub mod export;
pub mod report;

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::models::Money;
use crate::session::Session;

pub use config::{handle_config_command, handle_init_command};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_report_command, ReportCommands};

/// Where a command's ledger comes from
#[derive(Args, Debug, Clone, Default)]
pub struct LedgerArgs {
    /// CSV file with Date, Type, Category, Amount and optional Description columns
    #[arg(short, long, value_name = "CSV")]
    pub file: Option<PathBuf>,

    /// Extra transaction as DATE,TYPE,CATEGORY,AMOUNT[,DESCRIPTION] (repeatable)
    ///
    /// Usual categories are Salary for income and Food, Transport,
    /// Entertainment, Bills or Other for expenses; any label is accepted.
    #[arg(short, long = "entry", value_name = "ENTRY")]
    pub entries: Vec<String>,

    /// Savings goal to measure against instead of the configured one
    #[arg(long, value_name = "AMOUNT")]
    pub goal: Option<Money>,
}

impl LedgerArgs {
    /// Build the session: import the file, then append each entry in order
    pub fn open_session(&self, settings: Settings) -> FinanceResult<Session> {
        let settings = match self.goal {
            Some(goal) => settings.with_savings_goal(goal)?,
            None => settings,
        };

        let session = Session::new(settings);
        if let Some(path) = &self.file {
            session.import_file(path)?;
        }
        for entry in &self.entries {
            session.add_entry(entry)?;
        }

        debug!("Session holds {} transaction(s)", session.ledger().len());
        Ok(session)
    }
}
