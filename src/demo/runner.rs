// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dispatch from a menu choice to an engine operation.

use super::config::{Algorithm, Structure};
use super::errors::DemoError;
use crate::engine::RoundObserver;
use crate::model::{LinkedChain, RowTable};
use crate::state::Statistics;
use crate::{array, chain, table};

pub fn run_array(
    values: &mut [i32],
    algorithm: Algorithm,
    stats: &mut Statistics,
    observer: &mut dyn RoundObserver<[i32]>,
) -> Result<(), DemoError> {
    match algorithm {
        Algorithm::Selection => array::selection_sort(values, stats, observer),
        Algorithm::Bubble => array::bubble_sort(values, stats, observer),
        Algorithm::Insertion => array::insertion_sort(values, stats, observer),
        Algorithm::Quick => array::quick_sort(values, stats, observer),
        Algorithm::Merge => array::merge_sort(values, stats, observer),
        Algorithm::Comb => array::comb_sort(values, stats, observer),
    }
    Ok(())
}

pub fn run_chain(
    words: &mut LinkedChain,
    algorithm: Algorithm,
    stats: &mut Statistics,
    observer: &mut dyn RoundObserver<LinkedChain>,
) -> Result<(), DemoError> {
    match algorithm {
        Algorithm::Insertion => chain::insertion_sort(words, stats, observer),
        Algorithm::Bubble => chain::bubble_sort(words, stats, observer),
        _ => return Err(unsupported(Structure::Chain, algorithm)),
    }
    Ok(())
}

pub fn run_table(
    rows: &mut RowTable,
    algorithm: Algorithm,
    stats: &mut Statistics,
    observer: &mut dyn RoundObserver<RowTable>,
) -> Result<(), DemoError> {
    match algorithm {
        Algorithm::Bubble => table::bubble_sort(rows, stats, observer),
        Algorithm::Merge => table::merge_sort(rows, stats, observer),
        _ => return Err(unsupported(Structure::Table, algorithm)),
    }
    Ok(())
}

fn unsupported(structure: Structure, algorithm: Algorithm) -> DemoError {
    DemoError::Unsupported {
        structure,
        algorithm,
    }
}
