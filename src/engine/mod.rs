// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Round boundaries and the observer seam.
//!
//! A *round* is one externally observable step of a sort: a pass, a partition,
//! a merge, a gap iteration or a single insertion. After each round the engine
//! hands the caller a read-only snapshot of the container through a
//! [`RoundObserver`].
//!
//! # Rounds per algorithm
//!
//! | Algorithm                 | Round emitted after             |
//! |---------------------------|---------------------------------|
//! | selection, insertion      | each outer index (`Iteration`)  |
//! | bubble (array, table)     | each pass (`Pass`)              |
//! | bubble (chain)            | each pass (`Pass`)              |
//! | quick                     | each partition (`Partition`)    |
//! | merge (array, table)      | each merge (`Merge`)            |
//! | comb                      | each gap value (`Gap`)          |
//! | insertion (chain)         | each placed node (`Placement`)  |

pub mod observer;

pub use observer::{NoopObserver, RoundLog, RoundObserver};

use crate::model::Token;
use std::fmt;
use tracing::trace;

/// The round that has just completed.
///
/// Indices for `Iteration` and `Pass` are 1-based, counting rounds as a reader
/// would; `Partition` and `Merge` carry inclusive container indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Round {
    Iteration { index: usize },
    Pass { index: usize, swaps: usize },
    Partition {
        low: usize,
        high: usize,
        pivot_index: usize,
    },
    Merge {
        left: usize,
        mid: usize,
        right: usize,
    },
    Gap { gap: usize, swaps: usize },
    Placement { index: usize, token: Token },
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Round::Iteration { index } => write!(f, "Iteration {}", index),
            Round::Pass { index, swaps } => write!(f, "Pass {} ({} swaps)", index, swaps),
            Round::Partition { pivot_index, .. } => {
                write!(f, "After partitioning (pivot at index {})", pivot_index)
            }
            Round::Merge { left, mid, right } => write!(
                f,
                "After merging [{}-{}] and [{}-{}]",
                left,
                mid,
                mid + 1,
                right
            ),
            Round::Gap { gap, .. } => write!(f, "Gap {}", gap),
            Round::Placement { token, .. } => write!(f, "After inserting '{}'", token),
        }
    }
}

/// Report a finished round to the observer.
pub(crate) fn emit<T, O>(observer: &mut O, round: Round, snapshot: &T)
where
    T: ?Sized,
    O: RoundObserver<T> + ?Sized,
{
    trace!(%round, "round complete");
    observer.on_round(&round, snapshot);
}
