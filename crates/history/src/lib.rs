//! `stockbook-history` — event-sourced history projection.
//!
//! History is never stored as rows anywhere; it exists only as the event log.
//! This crate rebuilds the ordered history view on demand by replaying that
//! log end-to-end: a pure fold over recorded events, trivially restartable
//! and idempotent.

pub mod entry;
pub mod projector;

pub use entry::{HistoryEntry, HistoryKind, ProductSnapshot};
pub use projector::{CancelToken, HistoryError, HistoryProjector};
