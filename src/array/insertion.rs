// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Insertion sort.

use crate::engine::{emit, Round, RoundObserver};
use crate::state::Statistics;
use tracing::debug;

/// Sort `seq` by shifting each element left past larger predecessors.
///
/// Every shift costs one comparison and one movement; the comparison that
/// stops the scan costs a comparison only. Placing the held key is not a
/// movement, so sorted input reports none.
pub fn insertion_sort<O>(seq: &mut [i32], stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<[i32]> + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = seq[i];
        let mut j = i;

        while j > 0 {
            stats.record_comparison();
            if seq[j - 1] > key {
                seq[j] = seq[j - 1];
                stats.record_movement();
                j -= 1;
            } else {
                break;
            }
        }
        seq[j] = key;

        emit(observer, Round::Iteration { index: i }, &*seq);
    }

    debug!(algorithm = "insertion_sort", len, %stats, "sort complete");
}
