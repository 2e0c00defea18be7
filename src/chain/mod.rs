// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Linked sequence sort engine.
//!
//! Two sorts over a [`LinkedChain`](crate::model::LinkedChain):
//! - `insertion_sort` relinks nodes into a new sorted chain
//! - `bubble_sort` leaves the links alone and swaps tokens between nodes
//!
//! Both order tokens by ordinary string ordering. Empty and single-node chains
//! are left untouched with no counters moved.

pub mod bubble;
pub mod insertion;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
