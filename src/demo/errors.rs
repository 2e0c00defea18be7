// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Errors raised by the demonstration layer.

use super::config::{Algorithm, Structure};
use crate::errors::SortError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a choice was still being prompted for.
    #[error("Input closed before a choice was made")]
    InputClosed,

    #[error("{algorithm} is not available for {structure}")]
    Unsupported {
        structure: Structure,
        algorithm: Algorithm,
    },

    #[error("Array size {size} is outside {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error(transparent)]
    Sort(#[from] SortError),
}
