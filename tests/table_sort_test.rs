// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tests for the row table engine.

mod common;

use common::{addresses_of, random_words, sorted_copy, table_of, table_rows, token_addresses};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sorting_demo::table;
use sorting_demo::{NoopObserver, Round, RoundLog, RowTable, SortError, Statistics, TableShape};

#[test]
fn test_bubble_and_merge_agree() {
    let rows = ["zeta", "beta", "alph", "beta", "gamm", "delt"];
    let mut bubbled = table_of(4, &rows);
    let mut merged = table_of(4, &rows);

    table::bubble_sort(&mut bubbled, &mut Statistics::new(), &mut NoopObserver);
    table::merge_sort(&mut merged, &mut Statistics::new(), &mut NoopObserver);

    let expected = vec!["alph", "beta", "beta", "delt", "gamm", "zeta"];
    assert_eq!(table_rows(&bubbled), expected);
    assert_eq!(table_rows(&merged), expected);
}

#[test]
fn test_random_tables_sort_to_reference() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..80 {
        let rows = rng.gen_range(1..12);
        let width = rng.gen_range(1..5);
        let words = random_words(&mut rng, rows);
        let shape = TableShape::new(rows, width).unwrap();
        let original = RowTable::from_rows(shape, &words).unwrap();
        let expected = sorted_copy(&table_rows(&original));

        let mut bubbled = original.clone();
        table::bubble_sort(&mut bubbled, &mut Statistics::new(), &mut NoopObserver);
        let mut merged = original.clone();
        table::merge_sort(&mut merged, &mut Statistics::new(), &mut NoopObserver);

        assert_eq!(table_rows(&bubbled), expected, "bubble on {:?}", words);
        assert_eq!(table_rows(&merged), expected, "merge on {:?}", words);
        assert_eq!(bubbled.shape(), shape);
        assert_eq!(merged.shape(), shape);
    }
}

#[test]
fn test_sorted_table_is_left_unchanged() {
    let sorted = table_of(2, &["aa", "ab", "ab", "ba", "bb"]);

    let mut merged = sorted.clone();
    let mut stats = Statistics::new();
    table::merge_sort(&mut merged, &mut stats, &mut NoopObserver);
    assert_eq!(merged, sorted);
    // Merging still writes every row back.
    assert!(stats.data_movements() > 0);

    let mut bubbled = sorted.clone();
    let mut stats = Statistics::new();
    table::bubble_sort(&mut bubbled, &mut stats, &mut NoopObserver);
    assert_eq!(bubbled, sorted);
    assert_eq!(stats.data_movements(), 0);
}

#[test]
fn test_shape_is_preserved() {
    let mut rows = table_of(3, &["ccc", "a", "bb"]);
    let shape = rows.shape();

    table::merge_sort(&mut rows, &mut Statistics::new(), &mut NoopObserver);

    assert_eq!(rows.shape(), shape);
    assert_eq!(rows.len(), 3);
    assert_eq!(table_rows(&rows), vec!["a", "bb", "ccc"]);
}

#[test]
fn test_rows_are_truncated_to_width() {
    let shape = TableShape::new(2, 2).unwrap();
    let mut rows = RowTable::from_rows(shape, &["zzzz", "aaaa"]).unwrap();

    table::bubble_sort(&mut rows, &mut Statistics::new(), &mut NoopObserver);

    assert_eq!(table_rows(&rows), vec!["aa", "zz"]);
}

#[test]
fn test_merge_sort_is_stable() {
    let mut rows = table_of(2, &["bb", "aa", "bb", "aa", "bb"]);
    let before = token_addresses(rows.rows().iter());

    table::merge_sort(&mut rows, &mut Statistics::new(), &mut NoopObserver);

    let after = token_addresses(rows.rows().iter());
    for word in ["aa", "bb"] {
        assert_eq!(
            addresses_of(&before, word),
            addresses_of(&after, word),
            "equal rows {:?} were reordered",
            word
        );
    }
}

#[test]
fn test_bubble_sort_is_stable() {
    let mut rows = table_of(1, &["b", "a", "b", "a"]);
    let before = token_addresses(rows.rows().iter());

    table::bubble_sort(&mut rows, &mut Statistics::new(), &mut NoopObserver);

    let after = token_addresses(rows.rows().iter());
    assert_eq!(addresses_of(&before, "b"), addresses_of(&after, "b"));
    assert_eq!(addresses_of(&before, "a"), addresses_of(&after, "a"));
}

#[test]
fn test_bubble_pass_rounds() {
    let mut rows = table_of(1, &["c", "b", "a"]);
    let mut stats = Statistics::new();
    let mut log: RoundLog<RowTable> = RoundLog::new();

    table::bubble_sort(&mut rows, &mut stats, &mut log);

    assert_eq!(
        log.rounds().cloned().collect::<Vec<_>>(),
        vec![
            Round::Pass { index: 1, swaps: 2 },
            Round::Pass { index: 2, swaps: 1 },
        ]
    );
    assert_eq!(stats.comparisons(), 3);
    assert_eq!(stats.data_movements(), 3);
}

#[test]
fn test_merge_snapshots_never_show_blank_rows() {
    let mut rows = table_of(3, &["fig", "ash", "elm", "oak"]);
    let mut log: RoundLog<RowTable> = RoundLog::new();

    table::merge_sort(&mut rows, &mut Statistics::new(), &mut log);

    for snapshot in log.snapshots() {
        assert!(snapshot.rows().iter().all(|row| !row.is_empty()));
    }
}

#[test]
fn test_merge_sort_range_bounds() {
    let mut rows = table_of(1, &["d", "c", "b", "a"]);
    let mut stats = Statistics::new();

    table::merge_sort_range(&mut rows, 0, 1, &mut stats, &mut NoopObserver).unwrap();
    assert_eq!(table_rows(&rows), vec!["c", "d", "b", "a"]);

    assert_eq!(
        table::merge_sort_range(&mut rows, 0, 4, &mut stats, &mut NoopObserver),
        Err(SortError::BoundsOutOfRange {
            low: 0,
            high: 4,
            len: 4
        })
    );
}
