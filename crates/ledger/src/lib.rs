//! `stockbook-ledger` — the authoritative product ledger.
//!
//! Holds canonical product records under single-owner control and emits one
//! event per accepted mutation. Current state answers "what is true now";
//! the event log (replayed by `stockbook-history`) answers "what happened".

pub mod ledger;
pub mod product;

pub use ledger::Ledger;
pub use product::{ProductRecord, ProductStatus};
