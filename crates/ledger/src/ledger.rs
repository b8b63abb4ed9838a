use std::collections::BTreeMap;

use tracing::debug;

use stockbook_core::{AccountId, LedgerError, LedgerResult, ProductId};
use stockbook_events::{EventLog, LedgerEvent};

use crate::product::{ProductRecord, ProductStatus};

/// Single-owner product ledger.
///
/// Every accepted mutation appends exactly one event to the log, atomically
/// with the state change: validation happens first, the append is the only
/// fallible step, and the in-memory state change that follows cannot fail.
/// An event is never recorded without its state change persisting, and vice
/// versa.
///
/// Mutations are serialized through `&mut self`; reads take `&self` and
/// observe a consistent snapshot.
#[derive(Debug)]
pub struct Ledger<L> {
    owner: AccountId,
    products: BTreeMap<ProductId, ProductRecord>,
    products_issued: u64,
    log: L,
}

impl<L> Ledger<L>
where
    L: EventLog,
{
    pub fn new(owner: AccountId, log: L) -> Self {
        Self {
            owner,
            products: BTreeMap::new(),
            products_issued: 0,
            log,
        }
    }

    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// The event log this ledger appends to.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Highest product id ever issued.
    ///
    /// This equals the count of Added events ever emitted and never
    /// decreases. It is **not** the number of currently active products;
    /// soft-deleted products still count.
    pub fn products_issued(&self) -> u64 {
        self.products_issued
    }

    /// All currently active records, ascending by id.
    pub fn active_products(&self) -> impl Iterator<Item = &ProductRecord> {
        self.products.values().filter(|p| p.is_active())
    }

    /// Create a new product, owned-only.
    ///
    /// Assigns the next monotonic id (never reused), inserts the record as
    /// active, and appends one `Added` event carrying the same field values.
    pub fn add_product(
        &mut self,
        caller: AccountId,
        name: impl Into<String>,
        quantity: u64,
        unit_price: u64,
    ) -> LedgerResult<ProductId> {
        self.ensure_owner(caller)?;

        let name = name.into();
        validate_name(&name)?;

        let next = self.products_issued + 1;
        let id = ProductId::new(next)
            .ok_or_else(|| LedgerError::validation("product id counter overflow"))?;

        self.log
            .append(LedgerEvent::Added {
                product_id: id,
                name: name.clone(),
                quantity,
                unit_price,
            })
            .map_err(|e| LedgerError::emit(e.to_string()))?;

        self.products_issued = next;
        self.products.insert(
            id,
            ProductRecord {
                id,
                name,
                quantity,
                unit_price,
                status: ProductStatus::Active,
            },
        );

        debug!(product_id = %id, "product added");
        Ok(id)
    }

    /// Current snapshot of an active product.
    ///
    /// Soft-deleted products are indistinguishable from never-created ones
    /// here: both fail with `NotFound`.
    pub fn get_product(&self, id: ProductId) -> LedgerResult<ProductRecord> {
        self.active_record(id).cloned()
    }

    /// Overwrite the three mutable fields of an active product in place.
    ///
    /// The id and status are unaffected. Appends one `Updated` event carrying
    /// the new field values (a snapshot, not a diff).
    pub fn update_product(
        &mut self,
        caller: AccountId,
        id: ProductId,
        name: impl Into<String>,
        quantity: u64,
        unit_price: u64,
    ) -> LedgerResult<()> {
        self.ensure_owner(caller)?;
        self.active_record(id)?;

        let name = name.into();
        validate_name(&name)?;

        self.log
            .append(LedgerEvent::Updated {
                product_id: id,
                name: name.clone(),
                quantity,
                unit_price,
            })
            .map_err(|e| LedgerError::emit(e.to_string()))?;

        // Existence was checked above; the record is still there.
        if let Some(record) = self.products.get_mut(&id) {
            record.name = name;
            record.quantity = quantity;
            record.unit_price = unit_price;
        }

        debug!(product_id = %id, "product updated");
        Ok(())
    }

    /// Soft-delete an active product.
    ///
    /// Sets the status to `Deleted` without clearing any other field, and
    /// appends one `Deleted` event carrying only the id.
    pub fn delete_product(&mut self, caller: AccountId, id: ProductId) -> LedgerResult<()> {
        self.ensure_owner(caller)?;
        self.active_record(id)?;

        self.log
            .append(LedgerEvent::Deleted { product_id: id })
            .map_err(|e| LedgerError::emit(e.to_string()))?;

        if let Some(record) = self.products.get_mut(&id) {
            record.status = ProductStatus::Deleted;
        }

        debug!(product_id = %id, "product deleted");
        Ok(())
    }

    fn ensure_owner(&self, caller: AccountId) -> LedgerResult<()> {
        if caller != self.owner {
            return Err(LedgerError::AccessDenied);
        }
        Ok(())
    }

    fn active_record(&self, id: ProductId) -> LedgerResult<&ProductRecord> {
        match self.products.get(&id) {
            Some(record) if record.is_active() => Ok(record),
            _ => Err(LedgerError::NotFound),
        }
    }
}

fn validate_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::validation("product name cannot be empty"));
    }
    Ok(())
}
