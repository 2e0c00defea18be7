// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Top-down merge sort.

use crate::engine::{emit, Round, RoundObserver};
use crate::errors::{check_bounds, SortResult};
use crate::state::Statistics;
use tracing::debug;

/// Sort the whole of `seq`. Stable.
pub fn merge_sort<O>(seq: &mut [i32], stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<[i32]> + ?Sized,
{
    if seq.len() < 2 {
        return;
    }
    let right = seq.len() - 1;
    sort_range(seq, 0, right, stats, observer);
    debug!(algorithm = "merge_sort", len = seq.len(), %stats, "sort complete");
}

/// Sort the inclusive range `[left, right]` of `seq`.
pub fn merge_sort_range<O>(
    seq: &mut [i32],
    left: usize,
    right: usize,
    stats: &mut Statistics,
    observer: &mut O,
) -> SortResult<()>
where
    O: RoundObserver<[i32]> + ?Sized,
{
    check_bounds(left, right, seq.len())?;
    sort_range(seq, left, right, stats, observer);
    Ok(())
}

fn sort_range<O>(
    seq: &mut [i32],
    left: usize,
    right: usize,
    stats: &mut Statistics,
    observer: &mut O,
) where
    O: RoundObserver<[i32]> + ?Sized,
{
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    sort_range(seq, left, mid, stats, observer);
    sort_range(seq, mid + 1, right, stats, observer);
    merge(seq, left, mid, right, stats);

    emit(observer, Round::Merge { left, mid, right }, &*seq);
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`.
///
/// Ties take the left element. Every element written back counts as one
/// movement, including the leftover tail of either run.
fn merge(seq: &mut [i32], left: usize, mid: usize, right: usize, stats: &mut Statistics) {
    let left_run = seq[left..=mid].to_vec();
    let right_run = seq[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_run.len() && j < right_run.len() {
        stats.record_comparison();
        if left_run[i] <= right_run[j] {
            seq[k] = left_run[i];
            i += 1;
        } else {
            seq[k] = right_run[j];
            j += 1;
        }
        stats.record_movement();
        k += 1;
    }

    for &value in left_run[i..].iter().chain(&right_run[j..]) {
        seq[k] = value;
        stats.record_movement();
        k += 1;
    }
}
