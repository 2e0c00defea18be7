// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Insertion sort by relinking nodes.

use crate::engine::{emit, Round, RoundObserver};
use crate::model::chain::{Link, Node};
use crate::model::{LinkedChain, Token};
use crate::state::Statistics;
use tracing::debug;

/// Sort `chain` by moving each node, in turn, into a new sorted chain.
///
/// Nodes are relinked, never copied. A node is placed after every node that
/// is `<=` it, so equal tokens keep their original order. The observer sees
/// the sorted chain built so far after each placement.
pub fn insertion_sort<O>(chain: &mut LinkedChain, stats: &mut Statistics, observer: &mut O)
where
    O: RoundObserver<LinkedChain> + ?Sized,
{
    let len = chain.len();
    if len < 2 {
        return;
    }

    let mut remaining = chain.take_head();
    let mut sorted = LinkedChain::new();
    let mut placed = 0;

    while let Some(mut node) = remaining {
        remaining = node.next.take();
        let token = node.token.clone();

        let mut head = sorted.take_head();
        insert_node(&mut head, node, stats);
        placed += 1;
        sorted.set_head(head, placed);

        emit(
            observer,
            Round::Placement {
                index: placed,
                token,
            },
            &sorted,
        );
    }

    chain.set_head(sorted.take_head(), len);
    debug!(algorithm = "chain_insertion_sort", len, %stats, "sort complete");
}

/// Link `node` into the sorted list at `sorted`.
///
/// One comparison per existing node examined; reaching the end costs none.
/// The placement itself is one movement.
fn insert_node(sorted: &mut Link, mut node: Box<Node>, stats: &mut Statistics) {
    let mut cursor = sorted;
    while cursor
        .as_ref()
        .is_some_and(|current| precedes(&current.token, &node.token, stats))
    {
        if let Some(current) = cursor {
            cursor = &mut current.next;
        }
    }

    node.next = cursor.take();
    *cursor = Some(node);
    stats.record_movement();
}

fn precedes(existing: &Token, incoming: &Token, stats: &mut Statistics) -> bool {
    stats.record_comparison();
    existing <= incoming
}
