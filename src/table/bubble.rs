// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bubble sort over table rows.

use crate::engine::{emit, Round, RoundObserver};
use crate::model::RowTable;
use crate::state::Statistics;
use tracing::debug;

/// Sort the rows of `table` lexicographically with adjacent-pair passes.
///
/// Same pass structure as the array bubble sort: whole rows are compared and
/// swapped, and a pass with no swaps ends the sort.
pub fn bubble_sort<O>(table: &mut RowTable, stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<RowTable> + ?Sized,
{
    let rows = table.len();
    if rows < 2 {
        return;
    }

    for pass in 0..rows - 1 {
        let mut swaps = 0;
        for j in 0..rows - pass - 1 {
            stats.record_comparison();
            if table.rows()[j] > table.rows()[j + 1] {
                table.swap_rows(j, j + 1);
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
            &*table,
        );

        if swaps == 0 {
            break;
        }
    }

    debug!(algorithm = "table_bubble_sort", rows, %stats, "sort complete");
}
