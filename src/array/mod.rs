// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Array sort engine.
//!
//! Six in-place sorts over `[i32]`. Each takes the counters and an observer
//! by mutable reference, increments the counters as it works, and reports a
//! snapshot after every round. Empty and single-element slices are a no-op:
//! no counters move and no round is reported.
//!
//! Quick and merge sort also have `_range` forms taking explicit inclusive
//! bounds.

pub mod bubble;
pub mod comb;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::bubble_sort;
pub use comb::comb_sort;
pub use insertion::insertion_sort;
pub use merge::{merge_sort, merge_sort_range};
pub use quick::{quick_sort, quick_sort_range};
pub use selection::selection_sort;
