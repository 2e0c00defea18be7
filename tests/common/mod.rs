// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sorting_demo::{LinkedChain, RowTable, TableShape, Token};

pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Reference result computed without any of the crate's sorts.
pub fn sorted_copy<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.sort();
    copy
}

/// Seeded arrays of every length up to `max_len`, with plenty of duplicates
/// and negative values.
pub fn random_arrays(seed: u64, max_len: usize) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..=max_len)
        .map(|len| (0..len).map(|_| rng.gen_range(-20..20)).collect())
        .collect()
}

/// Short words over a three-letter alphabet, so ties are common.
pub fn random_words(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..4);
            (0..len)
                .map(|_| rng.gen_range(b'a'..=b'c') as char)
                .collect()
        })
        .collect()
}

pub fn chain_words(chain: &LinkedChain) -> Vec<String> {
    chain.iter().map(Token::to_string).collect()
}

pub fn table_of(width: usize, rows: &[&str]) -> RowTable {
    let shape = TableShape::new(rows.len(), width).unwrap();
    RowTable::from_rows(shape, rows).unwrap()
}

pub fn table_rows(table: &RowTable) -> Vec<String> {
    table.rows().iter().map(Token::to_string).collect()
}

/// Address of each token's storage, in order.
///
/// Nodes and row buffers move with their contents, so equal tokens can be
/// told apart by where they live.
pub fn token_addresses<'a>(tokens: impl Iterator<Item = &'a Token>) -> Vec<(String, usize)> {
    tokens
        .map(|t| (t.as_str().to_string(), t.as_str().as_ptr() as usize))
        .collect()
}

/// Addresses of the entries holding `word`, in order.
pub fn addresses_of(entries: &[(String, usize)], word: &str) -> Vec<usize> {
    entries
        .iter()
        .filter(|(w, _)| w == word)
        .map(|(_, addr)| *addr)
        .collect()
}
