// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection sort.

use crate::engine::{emit, Round, RoundObserver};
use crate::state::Statistics;
use tracing::debug;

/// Sort `seq` by repeatedly selecting the minimum of the unsorted suffix.
///
/// Ties keep the earliest index (strict `<`). A swap is only made when the
/// minimum is not already in place. One `Iteration` round per position
/// `0..len-1`.
pub fn selection_sort<O>(seq: &mut [i32], stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<[i32]> + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut min_index = i;
        for j in i + 1..len {
            stats.record_comparison();
            if seq[j] < seq[min_index] {
                min_index = j;
            }
        }

        if min_index != i {
            seq.swap(i, min_index);
            stats.record_movement();
        }

        emit(observer, Round::Iteration { index: i + 1 }, &*seq);
    }

    debug!(algorithm = "selection_sort", len, %stats, "sort complete");
}
