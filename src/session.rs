//! One run of the application
//!
//! A session owns the settings and the in-memory ledger. Every mutation goes
//! through here and is followed by a full recomputation of the dashboard, so
//! callers always render a consistent view.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::models::Transaction;
use crate::reports::Dashboard;
use crate::services::{AggregationEngine, ImportService, TransactionInput};
use crate::storage::LedgerStore;

/// Settings plus the ledger they apply to
#[derive(Debug, Default)]
pub struct Session {
    settings: Settings,
    ledger: LedgerStore,
}

impl Session {
    /// Start a session with an empty ledger
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ledger: LedgerStore::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn engine(&self) -> AggregationEngine<'_> {
        AggregationEngine::new(&self.ledger)
    }

    /// Replace the ledger with the contents of a CSV file
    ///
    /// The file is validated as a whole: if any row is rejected the ledger
    /// keeps its previous contents and the error lists every bad row.
    pub fn import_file(&self, path: &Path) -> FinanceResult<Dashboard> {
        info!("Importing ledger from {}", path.display());
        let report = self.importer().parse_file(path)?;
        self.install(report.into_transactions()?)
    }

    /// Replace the ledger with CSV read from `reader`
    pub fn import_csv<R: Read>(&self, reader: R) -> FinanceResult<Dashboard> {
        let report = self.importer().parse_csv_from_reader(reader)?;
        self.install(report.into_transactions()?)
    }

    /// Validate and append one transaction
    pub fn add(&self, input: &TransactionInput) -> FinanceResult<Dashboard> {
        let transaction = input.validate(&self.settings.date_format)?;
        debug!("Adding {}", transaction);
        self.ledger.append(transaction);
        Ok(self.refresh())
    }

    /// Parse a `DATE,TYPE,CATEGORY,AMOUNT[,DESCRIPTION]` line and append it
    pub fn add_entry(&self, line: &str) -> FinanceResult<Dashboard> {
        self.add(&TransactionInput::parse_line(line)?)
    }

    /// Recompute every report from the current ledger
    pub fn refresh(&self) -> Dashboard {
        self.engine().dashboard(self.settings.savings_goal)
    }

    fn importer(&self) -> ImportService {
        ImportService::new(self.settings.date_format.clone())
    }

    fn install(&self, transactions: Vec<Transaction>) -> FinanceResult<Dashboard> {
        info!("Loaded {} transaction(s)", transactions.len());
        self.ledger.replace(transactions);
        Ok(self.refresh())
    }
}
