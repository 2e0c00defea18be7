// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observer trait for per-round snapshots.
//!
//! Every sort operation calls `on_round` once per round with a read-only view
//! of the container. Engines never print; whatever the observer does with the
//! snapshot is up to the caller.
//!
//! # Example
//!
//! ```
//! use sorting_demo::array;
//! use sorting_demo::engine::{Round, RoundLog};
//! use sorting_demo::state::Statistics;
//!
//! let mut values = vec![3, 1, 2];
//! let mut stats = Statistics::new();
//! let mut log: RoundLog<Vec<i32>> = RoundLog::new();
//!
//! array::selection_sort(&mut values, &mut stats, &mut log);
//!
//! assert_eq!(values, vec![1, 2, 3]);
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.last_snapshot(), Some(&vec![1, 2, 3]));
//! ```

use super::Round;

/// Receives a snapshot of the container after each round.
pub trait RoundObserver<T: ?Sized> {
    fn on_round(&mut self, round: &Round, snapshot: &T);
}

impl<T: ?Sized, F> RoundObserver<T> for F
where
    F: FnMut(&Round, &T),
{
    fn on_round(&mut self, round: &Round, snapshot: &T) {
        self(round, snapshot)
    }
}

/// Observer that discards every round.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<T: ?Sized> RoundObserver<T> for NoopObserver {
    fn on_round(&mut self, _round: &Round, _snapshot: &T) {}
}

/// Observer that keeps an owned copy of every round and snapshot.
#[derive(Debug, Clone)]
pub struct RoundLog<S> {
    entries: Vec<(Round, S)>,
}

impl<S> RoundLog<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Round, S)] {
        &self.entries
    }

    pub fn rounds(&self) -> impl Iterator<Item = &Round> {
        self.entries.iter().map(|(round, _)| round)
    }

    pub fn snapshots(&self) -> Vec<&S> {
        self.entries.iter().map(|(_, snapshot)| snapshot).collect()
    }

    pub fn last_snapshot(&self) -> Option<&S> {
        self.entries.last().map(|(_, snapshot)| snapshot)
    }
}

impl<S> Default for RoundLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RoundObserver<T> for RoundLog<T::Owned>
where
    T: ?Sized + ToOwned,
{
    fn on_round(&mut self, round: &Round, snapshot: &T) {
        self.entries.push((round.clone(), snapshot.to_owned()));
    }
}
