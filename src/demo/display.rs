// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering for containers and counters.

use crate::engine::Round;
use crate::model::{LinkedChain, RowTable, Token};
use crate::state::Statistics;

/// Values separated by single spaces.
pub fn format_array(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_chain(chain: &LinkedChain) -> String {
    chain
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One row per line.
pub fn format_table(table: &RowTable) -> String {
    table
        .rows()
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_round(round: &Round, rendered: &str) -> String {
    if rendered.contains('\n') {
        format!("{}:\n{}", round, rendered)
    } else {
        format!("{}: {}", round, rendered)
    }
}

pub fn format_statistics(stats: &Statistics) -> String {
    format!(
        "=== Performance Statistics ===\n\
         Total comparisons: {}\n\
         Total data movements: {}\n\
         ==============================",
        stats.comparisons(),
        stats.data_movements()
    )
}
