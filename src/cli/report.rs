//! CLI commands for reports
//!
//! Each command builds a session from its ledger arguments and renders one
//! view of the recomputed dashboard.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use super::LedgerArgs;
use crate::config::Settings;
use crate::display::format_ledger_table;
use crate::error::{FinanceError, FinanceResult};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show every report at once
    Dashboard {
        #[command(flatten)]
        ledger: LedgerArgs,
    },

    /// Show income, expenses, net savings and savings rate
    Summary {
        #[command(flatten)]
        ledger: LedgerArgs,
    },

    /// Show income, expense and savings per month
    Monthly {
        #[command(flatten)]
        ledger: LedgerArgs,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show expenses by category
    #[command(alias = "cats")]
    Categories {
        #[command(flatten)]
        ledger: LedgerArgs,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show progress towards the savings goal
    Goal {
        #[command(flatten)]
        ledger: LedgerArgs,
    },

    /// List the raw transactions
    #[command(alias = "list")]
    Table {
        #[command(flatten)]
        ledger: LedgerArgs,
    },
}

/// Handle report commands
pub fn handle_report_command(settings: Settings, cmd: ReportCommands) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.clone();

    match cmd {
        ReportCommands::Dashboard { ledger } => {
            let dashboard = ledger.open_session(settings)?.refresh();
            println!("{}", dashboard.format_terminal(&symbol));
        }
        ReportCommands::Summary { ledger } => {
            let summary = ledger.open_session(settings)?.engine().summarize();
            println!("{}", summary.format_terminal(&symbol));
        }
        ReportCommands::Monthly { ledger, output } => {
            let series = ledger.open_session(settings)?.engine().monthly_series();
            match output {
                Some(path) => {
                    series.export_csv(&mut create_output(&path)?)?;
                    println!("Monthly report exported to: {}", path.display());
                }
                None => println!("{}", series.format_terminal(&symbol)),
            }
        }
        ReportCommands::Categories { ledger, output } => {
            let distribution = ledger.open_session(settings)?.engine().category_distribution();
            match output {
                Some(path) => {
                    distribution.export_csv(&mut create_output(&path)?)?;
                    println!("Category report exported to: {}", path.display());
                }
                None => println!("{}", distribution.format_terminal(&symbol)),
            }
        }
        ReportCommands::Goal { ledger } => {
            let goal = ledger.open_session(settings)?.refresh().goal;
            println!("{}", goal.format_terminal(&symbol));
        }
        ReportCommands::Table { ledger } => {
            let session = ledger.open_session(settings)?;
            print!("{}", format_ledger_table(&session.ledger().all(), &symbol));
        }
    }

    Ok(())
}

/// Open `path` for writing, wrapped in a buffer
pub(crate) fn create_output(path: &Path) -> FinanceResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
