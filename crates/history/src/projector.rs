use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::warn;

use stockbook_core::CommitRef;
use stockbook_events::{CommitMetadata, EventLog};

use crate::entry::HistoryEntry;

/// History projection error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// The event source could not be read at all. A truncated result is
    /// never returned as if it were complete.
    #[error("history unavailable: {0}")]
    Unavailable(String),

    /// The caller aborted the replay.
    #[error("history replay cancelled")]
    Cancelled,
}

/// Shared flag a caller can use to abort a long-running replay.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Replays the event log end-to-end into an ordered history view.
///
/// The projector performs no writes and holds no state between builds, so
/// two builds over the same log contents yield identical results. The per-
/// commit timestamp lookup is bounded by `timeout` and cached within one
/// build so each distinct commit reference is resolved at most once.
#[derive(Debug)]
pub struct HistoryProjector<L, M> {
    log: L,
    metadata: M,
    timeout: Duration,
}

impl<L, M> HistoryProjector<L, M>
where
    L: EventLog,
    M: CommitMetadata,
{
    pub fn new(log: L, metadata: M, timeout: Duration) -> Self {
        Self {
            log,
            metadata,
            timeout,
        }
    }

    /// Rebuild the full history view, most recent commit first.
    ///
    /// Entries whose commit timestamp cannot be resolved are still included
    /// with `timestamp: None`; only total event-source unavailability fails
    /// the whole build.
    pub fn build_history(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        self.build_history_with(&CancelToken::new())
    }

    /// Like [`build_history`](Self::build_history), abortable via `cancel`.
    ///
    /// Cancellation returns `HistoryError::Cancelled` rather than a partial
    /// view, and never corrupts concurrent reads (the replay is read-only).
    pub fn build_history_with(
        &self,
        cancel: &CancelToken,
    ) -> Result<Vec<HistoryEntry>, HistoryError> {
        let head = self
            .log
            .head_position()
            .map_err(|e| HistoryError::Unavailable(e.to_string()))?;

        if head == 0 {
            return Ok(Vec::new());
        }

        let recorded = self
            .log
            .events_in_range(1, head)
            .map_err(|e| HistoryError::Unavailable(e.to_string()))?;

        // One lookup per distinct commit reference, cached for this build.
        let mut timestamps: HashMap<CommitRef, Option<DateTime<Utc>>> = HashMap::new();
        let mut entries = Vec::with_capacity(recorded.len());

        for record in &recorded {
            if cancel.is_cancelled() {
                return Err(HistoryError::Cancelled);
            }

            let timestamp = *timestamps.entry(record.commit_ref).or_insert_with(|| {
                match self.metadata.resolve_timestamp(record.commit_ref, self.timeout) {
                    Ok(ts) => Some(ts),
                    Err(e) => {
                        warn!(
                            commit_position = record.commit_position,
                            error = %e,
                            "commit timestamp unresolved; including entry without it"
                        );
                        None
                    }
                }
            });

            entries.push(HistoryEntry::from_recorded(record, timestamp));
        }

        // Most recent commit first; the input is ascending, so a stable sort
        // keeps intra-commit emission order ascending within ties.
        entries.sort_by_key(|e| Reverse(e.commit_position));

        Ok(entries)
    }
}
