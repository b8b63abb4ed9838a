use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{ProductId, TxId};
use stockbook_events::{LedgerEvent, RecordedEvent};

/// What kind of mutation a history entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Added,
    Updated,
    Deleted,
}

/// Field values captured by an Added/Updated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    /// Derived: quantity × unit price at the time of the event.
    pub total_value: u64,
}

/// One normalized entry of the history view.
///
/// Delete events carry no field snapshot, so `snapshot` is `None` there:
/// the entry's total value is explicitly unknown, not zero.
/// `timestamp` is `None` when the commit's wall-clock time could not be
/// resolved; the entry is still included (partial data beats no data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub kind: HistoryKind,
    pub product_id: ProductId,
    pub snapshot: Option<ProductSnapshot>,
    pub commit_position: u64,
    pub tx_id: TxId,
    pub timestamp: Option<DateTime<Utc>>,
}

impl HistoryEntry {
    /// Normalize a recorded event into the history view shape.
    pub fn from_recorded(recorded: &RecordedEvent, timestamp: Option<DateTime<Utc>>) -> Self {
        let (kind, product_id, snapshot) = match &recorded.event {
            LedgerEvent::Added {
                product_id,
                name,
                quantity,
                unit_price,
            } => (
                HistoryKind::Added,
                *product_id,
                Some(ProductSnapshot {
                    name: name.clone(),
                    quantity: *quantity,
                    unit_price: *unit_price,
                    total_value: quantity.saturating_mul(*unit_price),
                }),
            ),
            LedgerEvent::Updated {
                product_id,
                name,
                quantity,
                unit_price,
            } => (
                HistoryKind::Updated,
                *product_id,
                Some(ProductSnapshot {
                    name: name.clone(),
                    quantity: *quantity,
                    unit_price: *unit_price,
                    total_value: quantity.saturating_mul(*unit_price),
                }),
            ),
            LedgerEvent::Deleted { product_id } => (HistoryKind::Deleted, *product_id, None),
        };

        Self {
            kind,
            product_id,
            snapshot,
            commit_position: recorded.commit_position,
            tx_id: recorded.tx_id,
            timestamp,
        }
    }

    /// Total value at the time of the event, if the event carried one.
    pub fn total_value(&self) -> Option<u64> {
        self.snapshot.as_ref().map(|s| s.total_value)
    }
}
