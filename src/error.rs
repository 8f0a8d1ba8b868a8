//! Error types for schedule computation

use thiserror::Error;

/// Errors produced by the amortization engine
///
/// There is exactly one class: input validation. The engine is pure and
/// performs no I/O, so there is no transient-failure variant and nothing to
/// retry. Whether a rejection is user-facing (bad form input) or a
/// programming error upstream is the caller's call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Input failed validation; carries a human-readable reason
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ScheduleError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ScheduleError::InvalidInput(reason.into())
    }
}
