use tracing::info;

use stockbook_core::{AccountId, ProductId};
use stockbook_events::EventLog;
use stockbook_ledger::Ledger;

use crate::row::{ImportError, ProductRow};

/// Outcome of a bulk import: one result per row, in input order.
///
/// Rows are independent; a failed row is reported in place while its
/// siblings proceed. Ids are only assigned to rows that pass validation,
/// so the ids of the successes stay contiguous across any skips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub outcomes: Vec<Result<ProductId, ImportError>>,
}

impl ImportReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Ids assigned to the successful rows, in input order.
    pub fn imported_ids(&self) -> Vec<ProductId> {
        self.outcomes.iter().filter_map(|o| o.clone().ok()).collect()
    }
}

/// Import labeled rows into the ledger, one product per row.
///
/// Each row is validated first and only then submitted, so a rejected row
/// never burns an id. Ledger failures (`AccessDenied`, `NotFound`) are
/// reported per row just like parse failures.
pub fn import_rows<'a, L, R>(
    ledger: &mut Ledger<L>,
    caller: AccountId,
    rows: R,
) -> ImportReport
where
    L: EventLog,
    R: IntoIterator<Item = Vec<(&'a str, &'a str)>>,
{
    let outcomes: Vec<Result<ProductId, ImportError>> = rows
        .into_iter()
        .map(|fields| {
            let row = ProductRow::parse(fields)?;
            submit(ledger, caller, row)
        })
        .collect();

    let report = ImportReport { outcomes };
    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "bulk import finished"
    );
    report
}

fn submit<L: EventLog>(
    ledger: &mut Ledger<L>,
    caller: AccountId,
    row: ProductRow,
) -> Result<ProductId, ImportError> {
    Ok(ledger.add_product(caller, row.name, row.quantity, row.unit_price)?)
}
