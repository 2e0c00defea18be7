// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point for the sorting demonstration.

use clap::{Parser, Subcommand};
use sorting_demo::demo::{Algorithm, DemoConfig, DemoError, Session, Structure};
use sorting_demo::model::{DEFAULT_ROW_WIDTH, DEFAULT_TABLE_ROWS, MAX_RANDOM_VALUE};
use sorting_demo::TableShape;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sortdemo",
    about = "Watch comparison sorts run step by step on arrays, linked lists and matrices",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Seed for the random data (omit for a different run each time)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of matrix rows
    #[arg(long, global = true, default_value_t = DEFAULT_TABLE_ROWS)]
    rows: usize,

    /// Characters per matrix row
    #[arg(long, global = true, default_value_t = DEFAULT_ROW_WIDTH)]
    width: usize,

    /// Generated array values are below this bound
    #[arg(long, global = true, default_value_t = MAX_RANDOM_VALUE)]
    max_value: i32,

    /// Print only the before/after state and the counters
    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Menu-driven session (the default)
    Interactive,

    /// Run a single demonstration without prompting
    Run {
        /// array, list or matrix
        structure: Structure,

        /// selection, bubble, insertion, quick, merge or comb
        algorithm: Algorithm,

        /// Array length (ignored for lists and matrices)
        #[arg(long, default_value_t = 10)]
        size: usize,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sorting_demo=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DemoError> {
    let config = DemoConfig {
        seed: cli.seed,
        table_shape: TableShape::new(cli.rows, cli.width)?,
        max_value: cli.max_value,
        quiet: cli.quiet,
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => session.run(),
        Command::Run {
            structure,
            algorithm,
            size,
        } => session.demonstrate(structure, algorithm, size).map(|_| ()),
    }
}
