// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Merge sort over table rows.

use crate::engine::{emit, Round, RoundObserver};
use crate::errors::{check_bounds, SortResult};
use crate::model::{RowTable, Token};
use crate::state::Statistics;
use std::mem;
use tracing::debug;

/// Sort every row of `table`. Stable.
pub fn merge_sort<O>(table: &mut RowTable, stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<RowTable> + ?Sized,
{
    if table.len() < 2 {
        return;
    }
    let right = table.len() - 1;
    sort_range(table, 0, right, stats, observer);
    debug!(algorithm = "table_merge_sort", rows = table.len(), %stats, "sort complete");
}

/// Sort rows `[left, right]` (inclusive) of `table`.
pub fn merge_sort_range<O>(
    table: &mut RowTable,
    left: usize,
    right: usize,
    stats: &mut Statistics,
    observer: &mut O,
) -> SortResult<()>
where
    O: RoundObserver<RowTable> + ?Sized,
{
    check_bounds(left, right, table.len())?;
    sort_range(table, left, right, stats, observer);
    Ok(())
}

fn sort_range<O>(
    table: &mut RowTable,
    left: usize,
    right: usize,
    stats: &mut Statistics,
    observer: &mut O,
) where
    O: RoundObserver<RowTable> + ?Sized,
{
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    sort_range(table, left, mid, stats, observer);
    sort_range(table, mid + 1, right, stats, observer);
    merge(table, left, mid, right, stats);

    emit(observer, Round::Merge { left, mid, right }, &*table);
}

fn merge(table: &mut RowTable, left: usize, mid: usize, right: usize, stats: &mut Statistics) {
    // Rows are moved out rather than copied; every slot is written back below.
    let mut left_run: Vec<Token> = (left..=mid).map(|i| table.take_row(i)).collect();
    let mut right_run: Vec<Token> = (mid + 1..=right).map(|i| table.take_row(i)).collect();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_run.len() && j < right_run.len() {
        stats.record_comparison();
        let row = if left_run[i] <= right_run[j] {
            i += 1;
            mem::take(&mut left_run[i - 1])
        } else {
            j += 1;
            mem::take(&mut right_run[j - 1])
        };
        table.put(k, row);
        stats.record_movement();
        k += 1;
    }

    let rest = left_run
        .into_iter()
        .skip(i)
        .chain(right_run.into_iter().skip(j));
    for row in rest {
        table.put(k, row);
        stats.record_movement();
        k += 1;
    }
}
