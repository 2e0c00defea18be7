// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Containers sorted by the engines.
//!
//! - `Token`: bounded-length text value
//! - `LinkedChain`: singly-linked chain of tokens
//! - `RowTable`: fixed-shape table of text rows
//!
//! Integer sequences need no wrapper; the array engine works on `[i32]`.

pub mod chain;
pub mod constants;
pub mod table;
pub mod token;

pub use chain::LinkedChain;
pub use constants::*;
pub use table::{RowTable, TableShape};
pub use token::Token;
