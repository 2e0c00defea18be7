// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Demonstration settings and the structure/algorithm catalogue.

use crate::model::{TableShape, MAX_RANDOM_VALUE};
use strum_macros::{Display, EnumIter, EnumString};

/// The container a demonstration runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Structure {
    #[strum(serialize = "array", to_string = "Array")]
    Array,
    #[strum(serialize = "chain", serialize = "list", to_string = "Linked List")]
    Chain,
    #[strum(serialize = "table", serialize = "matrix", to_string = "Matrix")]
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    #[strum(serialize = "selection", to_string = "Selection Sort")]
    Selection,
    #[strum(serialize = "bubble", to_string = "Bubble Sort")]
    Bubble,
    #[strum(serialize = "insertion", to_string = "Insertion Sort")]
    Insertion,
    #[strum(serialize = "quick", to_string = "Quick Sort")]
    Quick,
    #[strum(serialize = "merge", to_string = "Merge Sort")]
    Merge,
    #[strum(serialize = "comb", to_string = "Comb Sort")]
    Comb,
}

impl Algorithm {
    /// Algorithms offered for `structure`, in menu order.
    pub fn for_structure(structure: Structure) -> &'static [Algorithm] {
        match structure {
            Structure::Array => &[
                Algorithm::Selection,
                Algorithm::Bubble,
                Algorithm::Insertion,
                Algorithm::Quick,
                Algorithm::Merge,
                Algorithm::Comb,
            ],
            Structure::Chain => &[Algorithm::Insertion, Algorithm::Bubble],
            Structure::Table => &[Algorithm::Bubble, Algorithm::Merge],
        }
    }

    pub fn supports(self, structure: Structure) -> bool {
        Algorithm::for_structure(structure).contains(&self)
    }
}

/// Settings fixed for the whole of a demo session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Seed for data generation; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub table_shape: TableShape,
    /// Generated array values fall in `0..max_value`.
    pub max_value: i32,
    /// Skip the per-round snapshots and print only the result.
    pub quiet: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            table_shape: TableShape::default(),
            max_value: MAX_RANDOM_VALUE,
            quiet: false,
        }
    }
}
