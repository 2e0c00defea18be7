// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row table sort engine.
//!
//! Bubble and merge sort over the rows of a [`RowTable`](crate::model::RowTable),
//! ordering rows lexicographically as text. Rows move as whole units; the
//! table's shape is never changed.

pub mod bubble;
pub mod merge;

pub use bubble::bubble_sort;
pub use merge::{merge_sort, merge_sort_range};
