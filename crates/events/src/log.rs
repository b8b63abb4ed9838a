use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use stockbook_core::{CommitRef, TxId};

use crate::event::LedgerEvent;

/// An event as durably recorded in the log (assigned a commit position).
///
/// Commit positions are assigned by the log during append and are:
/// - **Monotonically increasing**: each append gets the next position (last + 1)
/// - **Immutable**: once assigned, a position never changes
///
/// Each recorded event also carries an opaque [`CommitRef`] (the handle of the
/// atomic commit unit it was recorded in, used to resolve metadata such as
/// timestamps) and a unique [`TxId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Monotonically increasing position in the log, starting at 1.
    pub commit_position: u64,
    pub commit_ref: CommitRef,
    pub tx_id: TxId,
    pub event: LedgerEvent,
}

/// Event log operation error.
///
/// These are **infrastructure errors** (storage, ordering) as opposed to
/// domain errors (access control, existence).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventLogError {
    /// The log could not be reached or read at all.
    #[error("event log unavailable: {0}")]
    Unavailable(String),

    /// A range query was malformed (from > to, or from == 0).
    #[error("invalid commit range [{from}, {to}]")]
    InvalidRange { from: u64, to: u64 },
}

/// Append-only, strictly ordered ledger event log.
///
/// ## Append semantics
///
/// `append()` assigns the next commit position (no gaps, no duplicates) and
/// records the event durably. There is **no** mutation API beyond append:
/// no deletion, no reordering, ever.
///
/// ## Query semantics
///
/// `events_in_range()` returns every recorded event whose commit position
/// falls within the caller-supplied **inclusive** range, in ascending
/// position order. Full-log replay uses `[1, head_position()]`; the range
/// form exists so callers can replay incrementally.
pub trait EventLog: Send + Sync {
    /// Record one event, assigning the next commit position.
    fn append(&self, event: LedgerEvent) -> Result<RecordedEvent, EventLogError>;

    /// The highest commit position assigned so far (0 when the log is empty).
    fn head_position(&self) -> Result<u64, EventLogError>;

    /// All events with `from <= commit_position <= to`, ascending.
    fn events_in_range(&self, from: u64, to: u64) -> Result<Vec<RecordedEvent>, EventLogError>;
}

impl<L> EventLog for Arc<L>
where
    L: EventLog + ?Sized,
{
    fn append(&self, event: LedgerEvent) -> Result<RecordedEvent, EventLogError> {
        (**self).append(event)
    }

    fn head_position(&self) -> Result<u64, EventLogError> {
        (**self).head_position()
    }

    fn events_in_range(&self, from: u64, to: u64) -> Result<Vec<RecordedEvent>, EventLogError> {
        (**self).events_in_range(from, to)
    }
}
