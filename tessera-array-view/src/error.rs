//! Error types for grid layout operations.

use thiserror::Error;

/// Errors raised by geometry computation and index queries.
///
/// "Not currently materialized" and "pool is empty" are not errors; those
/// queries return `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The layout configuration cannot produce a grid, for example a
    /// non-positive item dimension or a negative gap. Raised when geometry is
    /// computed, never silently clamped.
    #[error("invalid grid configuration: {reason}")]
    InvalidConfiguration {
        /// Which constraint was violated.
        reason: String,
    },
    /// An item index at or beyond the current item count was queried.
    #[error("item index {index} is out of range for {item_count} items")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The item count at the time of the query.
        item_count: usize,
    },
}

impl GridError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = GridError> = std::result::Result<T, E>;
