// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! The two performance counters shared by every sort engine. A `Statistics`
//! value is owned by the caller, reset before a demonstration run, and passed by
//! mutable reference into whichever engine operation runs next.

use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Logical comparisons between two elements.
    Comparisons,
    /// Element relocations: swaps, shifts and placements each count once.
    DataMovements,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Set every counter back to zero.
    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }

    pub fn record_comparison(&mut self) {
        self.increment_counter(Counters::Comparisons, 1);
    }

    /// Record one relocation event (a swap counts once).
    pub fn record_movement(&mut self) {
        self.increment_counter(Counters::DataMovements, 1);
    }

    pub fn record_movements(&mut self, n: u64) {
        self.increment_counter(Counters::DataMovements, n);
    }

    fn increment_counter(&mut self, counter: Counters, n: u64) {
        self.stats[counter as usize] += n;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn comparisons(&self) -> u64 {
        self.get(Counters::Comparisons)
    }

    pub fn data_movements(&self) -> u64 {
        self.get(Counters::DataMovements)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons: {}, data movements: {}",
            self.comparisons(),
            self.data_movements()
        )
    }
}
