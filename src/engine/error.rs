//! Error taxonomy for analysis operations.
//!
//! The engine has exactly two user-visible failure modes: empty input and
//! user-initiated cancellation. Invalid characters in the raw input are not
//! an error; they are dropped by the sanitizer and surfaced as a warning
//! flag alongside the result. Malformed counts or lengths are programming
//! invariants enforced with debug assertions, not runtime errors.

use thiserror::Error;

/// Error type for a single analysis run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The cleaned sequence had zero length after sanitization. The counter
    /// never runs and no result is produced.
    #[error("no sequence data to analyze; input was empty after cleanup")]
    EmptyInput,

    /// The analysis was cancelled at a chunk boundary. No result is
    /// produced and history is left untouched.
    #[error("analysis cancelled before completion")]
    Cancelled,
}

impl AnalysisError {
    /// Check whether this error is a benign, user-initiated stop.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AnalysisError::Cancelled)
    }
}
