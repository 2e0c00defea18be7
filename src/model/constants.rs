// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed configuration constants.
//!
//! These are fixed for a run. Table dimensions are only defaults: the engines
//! work with any [`TableShape`](super::TableShape).

/// Maximum number of characters kept in a [`Token`](super::Token).
///
/// Longer input is silently truncated on construction.
pub const MAX_TOKEN_LENGTH: usize = 99;

/// Default number of rows in a row table.
pub const DEFAULT_TABLE_ROWS: usize = 5;

/// Default number of characters in each table row.
///
/// The reference table stores five bytes per row, one of which is the
/// terminator, leaving four visible characters.
pub const DEFAULT_ROW_WIDTH: usize = 4;

/// Smallest array the interactive demo will generate.
pub const MIN_ARRAY_SIZE: usize = 5;

/// Largest array the interactive demo will generate.
pub const MAX_ARRAY_SIZE: usize = 1000;

/// Generated array values fall in `0..MAX_RANDOM_VALUE`.
pub const MAX_RANDOM_VALUE: i32 = 100;

/// Words used to build the demonstration chain.
pub const SAMPLE_WORDS: [&str; 10] = [
    "apple",
    "banana",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "honeydew",
    "kiwi",
    "lemon",
];
