// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bubble sort with early exit.

use crate::engine::{emit, Round, RoundObserver};
use crate::state::Statistics;
use tracing::debug;

/// Sort `seq` with adjacent-pair passes over a shrinking unsorted prefix.
///
/// Emits one `Pass` round per pass. A pass with no swaps ends the sort, so an
/// already sorted input costs exactly one pass.
pub fn bubble_sort<O>(seq: &mut [i32], stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<[i32]> + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return;
    }

    for pass in 0..len - 1 {
        let mut swaps = 0;
        for j in 0..len - pass - 1 {
            stats.record_comparison();
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
                stats.record_movement();
                swaps += 1;
            }
        }

        emit(
            observer,
            Round::Pass {
                index: pass + 1,
                swaps,
            },
            &*seq,
        );

        if swaps == 0 {
            debug!(pass = pass + 1, "no swaps, stopping early");
            break;
        }
    }

    debug!(algorithm = "bubble_sort", len, %stats, "sort complete");
}
