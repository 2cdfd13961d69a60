//! In-memory ledger store
//!
//! Holds the session's transactions. Nothing here validates or aggregates:
//! records arrive already checked by the ingestion layer and are read back as
//! snapshots by the aggregation engine.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;

use crate::models::Transaction;

/// Ordered collection of the session's transactions
///
/// Insertion order is kept but carries no meaning for aggregation. The
/// collection sits behind an `RwLock` so a `replace` is never observed half
/// done; a poisoned lock is recovered because the data is a plain `Vec` that
/// cannot be left logically inconsistent by a panicking writer.
#[derive(Debug, Default)]
pub struct LedgerStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `transactions`
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: RwLock::new(transactions),
        }
    }

    /// Discard the current collection and install `transactions`
    pub fn replace(&self, transactions: Vec<Transaction>) {
        let mut data = self.write();
        trace!(previous = data.len(), next = transactions.len(), "replacing ledger");
        *data = transactions;
    }

    /// Add one transaction to the end of the collection
    pub fn append(&self, transaction: Transaction) {
        let mut data = self.write();
        data.push(transaction);
        trace!(len = data.len(), "appended transaction");
    }

    /// Snapshot of every transaction in insertion order
    pub fn all(&self) -> Vec<Transaction> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Transaction>> {
        self.transactions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Transaction>> {
        self.transactions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
