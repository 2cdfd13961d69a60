use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_config_command, handle_export_command, handle_init_command, handle_report_command,
    ExportArgs, ReportCommands,
};
use fintrack::config::{FinancePaths, Settings};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance dashboard for the terminal",
    long_about = "fintrack reads a ledger of income and expense records from CSV and \
                  command-line entries, then reports net savings, savings rate, \
                  progress towards a savings goal, month-by-month totals and the \
                  spread of expenses across categories."
)]
struct Cli {
    /// Logging verbosity; RUST_LOG takes precedence when set
    #[arg(long, global = true, env = "FINTRACK_LOG", default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Export the dashboard (JSON/YAML) or the ledger (CSV)
    Export(ExportArgs),

    /// Write the settings file with defaults
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)
        .with_context(|| format!("Could not load {}", paths.settings_file().display()))?;

    match cli.command {
        Some(Commands::Report(cmd)) => handle_report_command(settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(settings, args)?,
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        None => {
            println!("fintrack - personal finance dashboard");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard --file ledger.csv' to see your numbers.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only this crate logs, at the requested level.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
