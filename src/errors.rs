// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for container construction and bounded sort calls.
//!
//! The sort algorithms themselves are total. Errors only arise when a
//! container is built with an impossible shape, or when a caller passes
//! explicit bounds that fall outside the container.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A table needs at least one row and one column.
    #[error("Invalid table shape: {rows} rows x {width} columns")]
    InvalidShape { rows: usize, width: usize },

    /// The rows supplied do not match the table's fixed row count.
    #[error("Expected {expected} rows, found {found}")]
    RowCountMismatch { expected: usize, found: usize },

    /// Inclusive bounds reach past the end of the container.
    #[error("Range [{low}, {high}] is outside a container of length {len}")]
    BoundsOutOfRange { low: usize, high: usize, len: usize },
}

pub type SortResult<T> = Result<T, SortError>;

/// Check inclusive bounds `[low, high]` against a container of length `len`.
///
/// An empty range (`low > high`) is always accepted; it sorts nothing.
pub(crate) fn check_bounds(low: usize, high: usize, len: usize) -> SortResult<()> {
    if low <= high && high >= len {
        return Err(SortError::BoundsOutOfRange { low, high, len });
    }
    Ok(())
}
