use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use stockbook_core::CommitRef;

/// Commit metadata lookup error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommitLookupError {
    /// The lookup did not complete within the caller-supplied timeout.
    #[error("commit metadata lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The commit reference is unknown to the metadata source.
    #[error("unknown commit reference")]
    UnknownCommit,

    /// The metadata source could not be reached.
    #[error("commit metadata source unavailable: {0}")]
    Unavailable(String),
}

/// Resolves the wall-clock timestamp of a commit unit.
///
/// The ledger's events carry no timestamps themselves; time is a property of
/// the enclosing commit and is resolved through this channel. Lookups must be
/// bounded by the caller-supplied timeout. A timeout is reported as an error
/// here and treated as a per-entry resolution failure by the projector, never
/// as a whole-replay failure.
pub trait CommitMetadata: Send + Sync {
    fn resolve_timestamp(
        &self,
        commit_ref: CommitRef,
        timeout: Duration,
    ) -> Result<DateTime<Utc>, CommitLookupError>;
}

impl<M> CommitMetadata for Arc<M>
where
    M: CommitMetadata + ?Sized,
{
    fn resolve_timestamp(
        &self,
        commit_ref: CommitRef,
        timeout: Duration,
    ) -> Result<DateTime<Utc>, CommitLookupError> {
        (**self).resolve_timestamp(commit_ref, timeout)
    }
}
