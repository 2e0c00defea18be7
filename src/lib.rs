// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step-by-step demonstration of comparison sorts.
//!
//! Three container shapes are covered:
//!
//! - integer arrays: selection, bubble, insertion, quick, merge and comb sort
//! - singly-linked chains of text tokens: insertion sort (relinking nodes) and
//!   bubble sort (swapping node contents)
//! - fixed-shape tables of text rows: bubble and merge sort
//!
//! # Counters and rounds
//!
//! Every operation sorts in place and threads two things through explicitly:
//!
//! 1. A [`Statistics`] value whose comparison and data-movement counters are
//!    incremented as the algorithm works. The caller resets it between runs.
//! 2. A [`RoundObserver`] that receives a read-only snapshot after each round
//!    (a pass, a partition, a merge, a gap iteration or a single insertion).
//!
//! There is no global state, so independent runs never interfere.
//!
//! # Example
//!
//! ```
//! use sorting_demo::{array, NoopObserver, Statistics};
//!
//! let mut values = vec![5, 2, 4, 1, 3];
//! let mut stats = Statistics::new();
//! array::bubble_sort(&mut values, &mut stats, &mut NoopObserver);
//!
//! assert_eq!(values, vec![1, 2, 3, 4, 5]);
//! assert_eq!(stats.comparisons(), 10);
//! ```

pub mod array;
pub mod chain;
pub mod demo;
pub mod engine;
pub mod errors;
pub mod model;
pub mod state;
pub mod table;

// Re-export commonly used types
pub use engine::{NoopObserver, Round, RoundLog, RoundObserver};
pub use errors::{SortError, SortResult};
pub use model::{LinkedChain, RowTable, TableShape, Token};
pub use state::{Counters, Statistics};
