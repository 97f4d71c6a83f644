//! Error types for the sorting harness.
//!
//! The sorting core itself has no recoverable failures: contract violations
//! such as an inverted range panic immediately. Errors here are the ones a
//! caller can reasonably handle, mostly at the harness and CLI boundary.

use thiserror::Error;

/// Errors produced by checked entry points and the benchmark harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value range used to populate a list is empty.
    #[error("invalid value range: min ({min}) is greater than max ({max})")]
    InvalidValueRange { min: i64, max: i64 },

    /// A range-scoped sort was requested outside the bounds of the slice.
    #[error("invalid range [{low}, {high}] for slice of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },

    /// Post-sort verification found an out-of-order pair at `index` and `index + 1`.
    #[error("list is not sorted at index {index}")]
    NotSorted { index: usize },

    /// Unknown algorithm name.
    #[error("unknown algorithm: {0}")]
    InvalidAlgorithm(String),
}

/// Result type for checked sorting and harness operations.
pub type Result<T> = std::result::Result<T, Error>;
