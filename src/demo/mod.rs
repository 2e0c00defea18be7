// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interactive demonstration layer.
//!
//! Everything with I/O lives here: random data generation, text rendering of
//! containers and rounds, and the menu session that ties them to the engines.
//! The engines themselves never print.

pub mod config;
pub mod display;
pub mod errors;
pub mod generate;
pub mod runner;
pub mod session;

pub use config::{Algorithm, DemoConfig, Structure};
pub use errors::DemoError;
pub use session::Session;
