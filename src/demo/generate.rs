// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Random demonstration data.
//!
//! Every generator takes the caller's `Rng`, so a seeded generator gives the
//! same data on every run.

use crate::model::{LinkedChain, RowTable, TableShape, Token, SAMPLE_WORDS};
use rand::seq::SliceRandom;
use rand::Rng;

/// `size` integers drawn uniformly from `0..max_value`.
///
/// A non-positive `max_value` yields all zeros.
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, size: usize, max_value: i32) -> Vec<i32> {
    if max_value <= 0 {
        return vec![0; size];
    }
    (0..size).map(|_| rng.gen_range(0..max_value)).collect()
}

/// A table whose rows are filled with random lowercase letters.
pub fn random_table<R: Rng + ?Sized>(rng: &mut R, shape: TableShape) -> RowTable {
    let mut table = RowTable::new(shape);
    for index in 0..shape.rows() {
        let row: String = (0..shape.width())
            .map(|_| rng.gen_range(b'a'..=b'z') as char)
            .collect();
        table.set_row(index, &row);
    }
    table
}

/// The sample words in their listed order.
pub fn sample_chain() -> LinkedChain {
    LinkedChain::from_words(&SAMPLE_WORDS)
}

/// The sample words in a random order.
pub fn shuffled_chain<R: Rng + ?Sized>(rng: &mut R) -> LinkedChain {
    let mut words = SAMPLE_WORDS;
    words.shuffle(rng);
    words.iter().map(|w| Token::new(w)).collect()
}
