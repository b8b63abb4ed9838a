//! End-to-end scenario: mutations → event log → history replay → stats.
//!
//! Walks a single product through its full lifecycle and checks that the
//! three read paths (current state, replayed history, derived stats) agree
//! at every step.

use std::sync::Arc;
use std::time::Duration;

use stockbook_core::{AccountId, LedgerError};
use stockbook_events::InMemoryEventLog;
use stockbook_history::{HistoryKind, HistoryProjector};
use stockbook_ledger::Ledger;
use stockbook_stats::{LedgerSummary, current_stock_value, total_transactions};

type TestProjector = HistoryProjector<Arc<InMemoryEventLog>, Arc<InMemoryEventLog>>;

fn setup() -> (Ledger<Arc<InMemoryEventLog>>, AccountId, TestProjector) {
    stockbook_observability::init();

    let log = Arc::new(InMemoryEventLog::new());
    let owner = AccountId::new();
    let ledger = Ledger::new(owner, log.clone());
    let projector = HistoryProjector::new(log.clone(), log, Duration::from_millis(100));
    (ledger, owner, projector)
}

#[test]
fn widget_lifecycle_keeps_all_read_paths_consistent() {
    let (mut ledger, owner, projector) = setup();

    // Add: id 1, one history entry, value 50 everywhere.
    let id = ledger.add_product(owner, "Widget", 10, 5).unwrap();
    assert_eq!(id.get(), 1);

    let history = projector.build_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, HistoryKind::Added);
    assert_eq!(history[0].total_value(), Some(50));
    assert_eq!(current_stock_value(&ledger), 50);

    // Update: two entries, the update first when sorted descending.
    ledger.update_product(owner, id, "Widget", 4, 5).unwrap();

    let history = projector.build_history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind, HistoryKind::Updated);
    assert_eq!(history[0].total_value(), Some(20));
    assert_eq!(current_stock_value(&ledger), 20);

    // Delete: three entries, delete entry value unknown, stock value zero,
    // but the issued counter still reports 1.
    ledger.delete_product(owner, id).unwrap();

    let history = projector.build_history().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].kind, HistoryKind::Deleted);
    assert_eq!(history[0].total_value(), None);
    assert_eq!(current_stock_value(&ledger), 0);
    assert_eq!(ledger.products_issued(), 1);
    assert_eq!(ledger.get_product(id), Err(LedgerError::NotFound));

    let summary = LedgerSummary::compute(&ledger, &history);
    assert_eq!(summary.current_stock_value, 0);
    assert_eq!(summary.products_issued, 1);
    assert_eq!(summary.total_transactions, 3);
}

#[test]
fn non_owner_cannot_disturb_any_read_path() {
    let (mut ledger, owner, projector) = setup();
    let stranger = AccountId::new();

    let id = ledger.add_product(owner, "Widget", 10, 5).unwrap();
    let before = projector.build_history().unwrap();

    assert_eq!(
        ledger.update_product(stranger, id, "Widget", 0, 0),
        Err(LedgerError::AccessDenied)
    );
    assert_eq!(
        ledger.delete_product(stranger, id),
        Err(LedgerError::AccessDenied)
    );

    let after = projector.build_history().unwrap();
    assert_eq!(before, after);
    assert_eq!(current_stock_value(&ledger), 50);
    assert_eq!(total_transactions(&after), 1);
}

#[test]
fn deleted_product_vanishes_from_stats_but_not_from_history() {
    let (mut ledger, owner, projector) = setup();

    let keep = ledger.add_product(owner, "Keep", 2, 30).unwrap();
    let drop = ledger.add_product(owner, "Drop", 5, 10).unwrap();
    ledger.delete_product(owner, drop).unwrap();

    assert_eq!(current_stock_value(&ledger), 60);
    assert!(ledger.get_product(keep).is_ok());

    let history = projector.build_history().unwrap();
    assert_eq!(total_transactions(&history), 3);
    assert!(
        history
            .iter()
            .any(|e| e.kind == HistoryKind::Deleted && e.product_id == drop)
    );
}
