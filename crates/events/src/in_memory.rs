//! In-memory append-only event log.
//!
//! Intended for tests/dev and as the reference backend. Any substitute
//! backend must preserve the same guarantees: positions are assigned
//! monotonically with no gaps, and an append is all-or-nothing.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use chrono::{DateTime, Utc};

use stockbook_core::{CommitRef, TxId};

use crate::commit::{CommitLookupError, CommitMetadata};
use crate::event::LedgerEvent;
use crate::log::{EventLog, EventLogError, RecordedEvent};

#[derive(Debug, Default)]
struct LogState {
    records: Vec<RecordedEvent>,
    /// Commit wall-clock times, keyed by commit reference.
    commit_times: HashMap<CommitRef, DateTime<Utc>>,
}

/// In-memory event log that doubles as its own commit-metadata source.
///
/// Each append opens and closes its own commit unit, so every recorded event
/// gets a fresh [`CommitRef`] whose timestamp is captured at append time.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    state: RwLock<LogState>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventLog for InMemoryEventLog {
    fn append(&self, event: LedgerEvent) -> Result<RecordedEvent, EventLogError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| EventLogError::Unavailable("lock poisoned".to_string()))?;

        let commit_position = state.records.last().map(|r| r.commit_position).unwrap_or(0) + 1;
        let commit_ref = CommitRef::new();
        let recorded = RecordedEvent {
            commit_position,
            commit_ref,
            tx_id: TxId::new(),
            event,
        };

        state.commit_times.insert(commit_ref, Utc::now());
        state.records.push(recorded.clone());

        Ok(recorded)
    }

    fn head_position(&self) -> Result<u64, EventLogError> {
        let state = self
            .state
            .read()
            .map_err(|_| EventLogError::Unavailable("lock poisoned".to_string()))?;

        Ok(state.records.last().map(|r| r.commit_position).unwrap_or(0))
    }

    fn events_in_range(&self, from: u64, to: u64) -> Result<Vec<RecordedEvent>, EventLogError> {
        if from == 0 || from > to {
            return Err(EventLogError::InvalidRange { from, to });
        }

        let state = self
            .state
            .read()
            .map_err(|_| EventLogError::Unavailable("lock poisoned".to_string()))?;

        // Positions are dense and 1-based, so the range maps directly to a slice.
        Ok(state
            .records
            .iter()
            .filter(|r| r.commit_position >= from && r.commit_position <= to)
            .cloned()
            .collect())
    }
}

impl CommitMetadata for InMemoryEventLog {
    fn resolve_timestamp(
        &self,
        commit_ref: CommitRef,
        _timeout: Duration,
    ) -> Result<DateTime<Utc>, CommitLookupError> {
        let state = self
            .state
            .read()
            .map_err(|_| CommitLookupError::Unavailable("lock poisoned".to_string()))?;

        state
            .commit_times
            .get(&commit_ref)
            .copied()
            .ok_or(CommitLookupError::UnknownCommit)
    }
}
