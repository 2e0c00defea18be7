// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Comb sort.

use crate::engine::{emit, Round, RoundObserver};
use crate::state::Statistics;
use tracing::debug;

/// Gap shrink factor, as a fraction.
const SHRINK_NUMERATOR: usize = 10;
const SHRINK_DENOMINATOR: usize = 13;

/// Next gap: `gap * 10 / 13`, floored, never below 1.
pub fn next_gap(gap: usize) -> usize {
    (gap * SHRINK_NUMERATOR / SHRINK_DENOMINATOR).max(1)
}

/// Sort `seq` by comparing elements a shrinking gap apart.
///
/// The gap starts at `len` and shrinks before every iteration. The sort ends
/// once an iteration at gap 1 makes no swaps. One `Gap` round per iteration.
pub fn comb_sort<O>(seq: &mut [i32], stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<[i32]> + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return;
    }

    let mut gap = len;
    let mut swapped = true;

    while gap != 1 || swapped {
        gap = next_gap(gap);

        let mut swaps = 0;
        for i in 0..len - gap {
            stats.record_comparison();
            if seq[i] > seq[i + gap] {
                seq.swap(i, i + gap);
                stats.record_movement();
                swaps += 1;
            }
        }
        swapped = swaps > 0;

        emit(observer, Round::Gap { gap, swaps }, &*seq);
    }

    debug!(algorithm = "comb_sort", len, %stats, "sort complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoundLog;

    fn gaps(log: &RoundLog<Vec<i32>>) -> Vec<usize> {
        log.rounds()
            .map(|round| match round {
                Round::Gap { gap, .. } => *gap,
                other => panic!("unexpected round {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_next_gap() {
        assert_eq!(next_gap(10), 7);
        assert_eq!(next_gap(7), 5);
        assert_eq!(next_gap(2), 1);
        assert_eq!(next_gap(1), 1);
    }

    #[test]
    fn test_comb_sort_basic() {
        let mut values = vec![8, 4, 1, 56, 3, -44, 23, -6, 28, 0];
        let mut stats = Statistics::new();
        let mut log: RoundLog<Vec<i32>> = RoundLog::new();

        comb_sort(&mut values, &mut stats, &mut log);

        assert_eq!(values, vec![-44, -6, 0, 1, 3, 4, 8, 23, 28, 56]);
        let gaps = gaps(&log);
        assert_eq!(&gaps[..5], &[7, 5, 3, 2, 1]);
        assert!(gaps[5..].iter().all(|&gap| gap == 1));
        assert!(matches!(
            log.rounds().last(),
            Some(Round::Gap { gap: 1, swaps: 0 })
        ));
    }

    #[test]
    fn test_comb_sort_sorted_input() {
        let mut values = vec![1, 2, 3, 4, 5];
        let mut stats = Statistics::new();
        let mut log: RoundLog<Vec<i32>> = RoundLog::new();

        comb_sort(&mut values, &mut stats, &mut log);

        // Gaps 3, 2, 1; the single gap-1 pass finds nothing to swap.
        assert_eq!(gaps(&log), vec![3, 2, 1]);
        assert_eq!(stats.data_movements(), 0);
        assert_eq!(stats.comparisons(), 2 + 3 + 4);
    }
}
