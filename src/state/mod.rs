// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable run state shared by the sort engines.
//!
//! Currently this is only the pair of performance counters. Callers own the
//! `Statistics` value and thread it through each engine call explicitly.

pub mod statistics;

pub use statistics::{Counters, Statistics};
