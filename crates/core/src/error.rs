//! Domain error model.

use thiserror::Error;

/// Result type used across the ledger domain.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Keep this focused on deterministic domain failures (access control,
/// existence, validation). Replay/projection failures live in the history
/// crate; they are a different read path with different degradation rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The caller is not the designated owner of the ledger.
    #[error("only the owner can perform this action")]
    AccessDenied,

    /// No active product exists for the requested id.
    ///
    /// Soft-deleted products are reported identically to never-created ones:
    /// "deleted means gone" for every normal read path.
    #[error("product not found")]
    NotFound,

    /// A value failed validation (e.g. empty name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The event log rejected the append, so the mutation was not applied.
    #[error("event append failed: {0}")]
    Emit(String),
}

impl LedgerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn emit(msg: impl Into<String>) -> Self {
        Self::Emit(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_reasons_are_human_readable() {
        assert_eq!(
            LedgerError::AccessDenied.to_string(),
            "only the owner can perform this action"
        );
        assert_eq!(LedgerError::NotFound.to_string(), "product not found");
    }
}
