//! `stockbook-events` — the append-only ledger event log.
//!
//! Events are the sole source of "what happened". There is no materialized
//! history table anywhere in this workspace; history is always rebuilt by
//! replaying this log.

pub mod commit;
pub mod event;
pub mod in_memory;
pub mod log;

pub use commit::{CommitLookupError, CommitMetadata};
pub use event::LedgerEvent;
pub use in_memory::InMemoryEventLog;
pub use log::{EventLog, EventLogError, RecordedEvent};
