//! `stockbook-stats` — derived statistics over the ledger and history.
//!
//! The two read paths are deliberately decoupled: stock value scans the
//! ledger's *current* state, while the transaction count consumes the
//! history projector's *replayed* output. A deleted product contributes to
//! neither the stock value nor the active set, yet its delete entry still
//! counts as a transaction.

use serde::{Deserialize, Serialize};

use stockbook_events::EventLog;
use stockbook_history::HistoryEntry;
use stockbook_ledger::Ledger;

/// Sum of quantity × unit price over all currently active products.
///
/// Scans the ledger's current state, not the event log. Soft-deleted
/// records remain in storage but contribute nothing here.
pub fn current_stock_value<L: EventLog>(ledger: &Ledger<L>) -> u64 {
    ledger
        .active_products()
        .map(|p| p.total_value())
        .fold(0u64, u64::saturating_add)
}

/// Number of transactions in a built history view.
///
/// Defined over the projector's output rather than recomputed from the log,
/// so it can never disagree with what the history view shows. Callers must
/// rebuild the view (and thus this count) after new events are appended.
pub fn total_transactions(history: &[HistoryEntry]) -> u64 {
    history.len() as u64
}

/// Snapshot of the derived statistics, for display/export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Σ quantity × unit price over active products.
    pub current_stock_value: u64,
    /// Highest product id ever issued (not an active count).
    pub products_issued: u64,
    /// Entries in the supplied history view.
    pub total_transactions: u64,
}

impl LedgerSummary {
    pub fn compute<L: EventLog>(ledger: &Ledger<L>, history: &[HistoryEntry]) -> Self {
        Self {
            current_stock_value: current_stock_value(ledger),
            products_issued: ledger.products_issued(),
            total_transactions: total_transactions(history),
        }
    }
}
