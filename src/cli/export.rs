//! CLI command for data export

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::report::create_output;
use super::LedgerArgs;
use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_dashboard_json, export_dashboard_yaml, export_ledger_csv};
use crate::session::Session;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Dashboard snapshot as JSON
    Json,
    /// Dashboard snapshot as YAML
    Yaml,
    /// Ledger as CSV, readable by --file
    Csv,
}

/// Arguments for `fintrack export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub ledger: LedgerArgs,

    /// Export format
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(settings: Settings, args: ExportArgs) -> FinanceResult<()> {
    let session = args.ledger.open_session(settings)?;

    match &args.output {
        Some(path) => {
            let mut writer = create_output(path)?;
            write_export(&session, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FinanceError::Export(e.to_string()))?;
            println!("Exported to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_export(&session, args.format, &mut stdout.lock())?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    session: &Session,
    format: ExportFormat,
    writer: &mut W,
) -> FinanceResult<()> {
    let transactions = session.ledger().all();
    match format {
        ExportFormat::Json => {
            export_dashboard_json(&session.refresh(), transactions.len(), writer)
        }
        ExportFormat::Yaml => {
            export_dashboard_yaml(&session.refresh(), transactions.len(), writer)
        }
        ExportFormat::Csv => export_ledger_csv(&transactions, writer),
    }
}
