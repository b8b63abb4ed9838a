use serde::{Deserialize, Serialize};

use stockbook_core::ProductId;

/// A state-change event emitted by the ledger.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **full snapshots** for Added/Updated (never diffs)
/// - designed to be **append-only**
///
/// `Deleted` deliberately carries only the id: the deleted product's last
/// field values are recoverable from the preceding Added/Updated events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LedgerEvent {
    Added {
        product_id: ProductId,
        name: String,
        quantity: u64,
        unit_price: u64,
    },
    Updated {
        product_id: ProductId,
        name: String,
        quantity: u64,
        unit_price: u64,
    },
    Deleted {
        product_id: ProductId,
    },
}

impl LedgerEvent {
    /// Stable event name/type identifier.
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::Added { .. } => "ledger.product.added",
            LedgerEvent::Updated { .. } => "ledger.product.updated",
            LedgerEvent::Deleted { .. } => "ledger.product.deleted",
        }
    }

    /// The product this event refers to.
    pub fn product_id(&self) -> ProductId {
        match self {
            LedgerEvent::Added { product_id, .. }
            | LedgerEvent::Updated { product_id, .. }
            | LedgerEvent::Deleted { product_id } => *product_id,
        }
    }
}
