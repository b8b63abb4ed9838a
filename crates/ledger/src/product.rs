use serde::{Deserialize, Serialize};

use stockbook_core::ProductId;

/// Product lifecycle status.
///
/// Modeled as a tagged status rather than a raw boolean so read-path logic
/// cannot accidentally branch on the wrong flag. `Deleted` is a soft delete:
/// the record stays in storage with all fields intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Deleted,
}

/// Canonical product record held by the ledger.
///
/// Only the current snapshot lives here; a product's full field history is
/// recoverable solely through the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub quantity: u64,
    pub unit_price: u64,
    pub status: ProductStatus,
}

impl ProductRecord {
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Current stock value of this record (quantity × unit price).
    pub fn total_value(&self) -> u64 {
        self.quantity.saturating_mul(self.unit_price)
    }
}
