use serde::{Deserialize, Serialize};

use stockbook_core::ProductId;
use stockbook_events::EventLog;
use stockbook_history::HistoryEntry;
use stockbook_ledger::{Ledger, ProductRecord};
use stockbook_stats::LedgerSummary;

/// One product row of a tabular export.
///
/// Field names follow the exchange contract: the record's own fields plus a
/// computed `Total Stock Value` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductExportRow {
    pub id: ProductId,
    pub name: String,
    pub quantity: u64,
    #[serde(rename = "unitPrice")]
    pub unit_price: u64,
    #[serde(rename = "Total Stock Value")]
    pub total_stock_value: u64,
}

impl From<&ProductRecord> for ProductExportRow {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            quantity: record.quantity,
            unit_price: record.unit_price,
            total_stock_value: record.total_value(),
        }
    }
}

/// Export all active products as tabular rows, ascending by id.
pub fn export_products<L: EventLog>(ledger: &Ledger<L>) -> Vec<ProductExportRow> {
    ledger.active_products().map(ProductExportRow::from).collect()
}

/// One self-contained export document: summary block, active product list,
/// and the full history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedExport {
    pub summary: LedgerSummary,
    pub products: Vec<ProductExportRow>,
    pub history: Vec<HistoryEntry>,
}

/// Build the combined export from current state and an already-built
/// history view (the caller decides how fresh that view is).
pub fn export_combined<L: EventLog>(
    ledger: &Ledger<L>,
    history: Vec<HistoryEntry>,
) -> CombinedExport {
    CombinedExport {
        summary: LedgerSummary::compute(ledger, &history),
        products: export_products(ledger),
        history,
    }
}
