//! Error taxonomy for progress translation.

use thiserror::Error;

/// Errors that abort a single translation call.
///
/// The caller should skip the update and keep the previous snapshot.
/// Out-of-range indices are not errors; they produce degenerate snapshots.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProgressError {
    /// The engine reported a negative leg or step index.
    #[error("{what} index {index} is negative")]
    NegativeIndex {
        /// Which index was negative ("leg" or "step").
        what: &'static str,
        /// The reported value.
        index: i64,
    },

    /// A trip status arrived before any route was set.
    #[error("no active route; set a route before translating trip status")]
    NoActiveRoute,
}

/// Result type for progress operations.
pub type ProgressResult<T> = Result<T, ProgressError>;
