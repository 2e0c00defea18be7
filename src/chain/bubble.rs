// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bubble sort by exchanging node contents.

use crate::engine::{emit, Round, RoundObserver};
use crate::model::LinkedChain;
use crate::state::Statistics;
use std::mem;
use tracing::debug;

/// Sort `chain` with repeated passes, swapping tokens between adjacent nodes.
///
/// Links are never changed. Each pass stops one node earlier than the last,
/// since the previous pass left its largest token at the boundary. Passes
/// repeat until one makes no swaps; once the unsorted region has shrunk to a
/// single node that final pass compares nothing.
pub fn bubble_sort<O>(chain: &mut LinkedChain, stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<LinkedChain> + ?Sized,
{
    let len = chain.len();
    if len < 2 {
        return;
    }

    let mut pairs = len - 1;
    let mut pass = 0;

    loop {
        pass += 1;
        let mut swaps = 0;
        let mut cursor = chain.head_mut();

        for _ in 0..pairs {
            let Some(node) = cursor else { break };
            let Some(next) = node.next.as_deref_mut() else {
                break;
            };

            stats.record_comparison();
            if node.token > next.token {
                mem::swap(&mut node.token, &mut next.token);
                stats.record_movement();
                swaps += 1;
            }
            cursor = node.next.as_deref_mut();
        }

        emit(observer, Round::Pass { index: pass, swaps }, &*chain);

        if swaps == 0 {
            break;
        }
        pairs = pairs.saturating_sub(1);
    }

    debug!(algorithm = "chain_bubble_sort", len, passes = pass, %stats, "sort complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoundLog;
    use crate::model::Token;

    fn words(chain: &LinkedChain) -> Vec<&str> {
        chain.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_bubble_sort_chain() {
        let mut chain =
            LinkedChain::from_words(&["banana", "apple", "cherry", "date", "elderberry"]);
        let mut stats = Statistics::new();
        let mut log: RoundLog<LinkedChain> = RoundLog::new();

        bubble_sort(&mut chain, &mut stats, &mut log);

        assert_eq!(
            words(&chain),
            vec!["apple", "banana", "cherry", "date", "elderberry"]
        );
        // One swapping pass, then a clean pass over the shorter region.
        assert_eq!(log.len(), 2);
        assert_eq!(stats.comparisons(), 4 + 3);
        assert_eq!(stats.data_movements(), 1);
    }

    #[test]
    fn test_bubble_sort_sorted_chain_single_pass() {
        let mut chain = LinkedChain::from_words(&["a", "b", "c"]);
        let mut stats = Statistics::new();
        let mut log: RoundLog<LinkedChain> = RoundLog::new();

        bubble_sort(&mut chain, &mut stats, &mut log);

        assert_eq!(log.len(), 1);
        assert_eq!(stats.comparisons(), 2);
        assert_eq!(stats.data_movements(), 0);
    }

    #[test]
    fn test_bubble_sort_reverse_pair_ends_with_empty_pass() {
        let mut chain = LinkedChain::from_words(&["b", "a"]);
        let mut stats = Statistics::new();
        let mut log: RoundLog<LinkedChain> = RoundLog::new();

        bubble_sort(&mut chain, &mut stats, &mut log);

        assert_eq!(words(&chain), vec!["a", "b"]);
        assert_eq!(
            log.rounds().cloned().collect::<Vec<_>>(),
            vec![
                Round::Pass { index: 1, swaps: 1 },
                Round::Pass { index: 2, swaps: 0 },
            ]
        );
        assert_eq!(stats.comparisons(), 1);
    }
}
