// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Quick sort with Lomuto partitioning.

use crate::engine::{emit, Round, RoundObserver};
use crate::errors::{check_bounds, SortResult};
use crate::state::Statistics;
use tracing::debug;

/// Sort the whole of `seq`.
pub fn quick_sort<O>(seq: &mut [i32], stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<[i32]> + ?Sized,
{
    if seq.len() < 2 {
        return;
    }
    let high = seq.len() - 1;
    sort_range(seq, 0, high, stats, observer);
    debug!(algorithm = "quick_sort", len = seq.len(), %stats, "sort complete");
}

/// Sort the inclusive range `[low, high]` of `seq`, leaving the rest alone.
///
/// `low > high` is an empty range and does nothing.
pub fn quick_sort_range<O>(
    seq: &mut [i32],
    low: usize,
    high: usize,
    stats: &mut Statistics,
    observer: &mut O,
) -> SortResult<()>
where
    O: RoundObserver<[i32]> + ?Sized,
{
    check_bounds(low, high, seq.len())?;
    sort_range(seq, low, high, stats, observer);
    Ok(())
}

fn sort_range<O>(seq: &mut [i32], low: usize, high: usize, stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<[i32]> + ?Sized,
{
    if low >= high {
        return;
    }

    let pivot_index = partition(seq, low, high, stats);
    emit(
        observer,
        Round::Partition {
            low,
            high,
            pivot_index,
        },
        &*seq,
    );

    if pivot_index > low {
        sort_range(seq, low, pivot_index - 1, stats, observer);
    }
    sort_range(seq, pivot_index + 1, high, stats, observer);
}

/// Partition `[low, high]` around `seq[high]` and return the pivot's final index.
///
/// Each element is compared with the pivot once. Every swap into the left
/// region counts as a movement, even a swap of an element with itself, and so
/// does the final pivot placement.
pub fn partition(seq: &mut [i32], low: usize, high: usize, stats: &mut Statistics) -> usize {
    let pivot = seq[high];
    let mut store = low;

    for j in low..high {
        stats.record_comparison();
        if seq[j] < pivot {
            seq.swap(store, j);
            stats.record_movement();
            store += 1;
        }
    }

    seq.swap(store, high);
    stats.record_movement();
    store
}
