// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Menu-driven demonstration session.
//!
//! The session reads choices from any `BufRead` and writes everything it shows
//! to any `Write`, so a scripted input drives it the same way a terminal does.
//! Invalid choices are answered with a message and a fresh prompt; they never
//! reach the engines.

use super::config::{Algorithm, DemoConfig, Structure};
use super::display::{format_array, format_chain, format_round, format_statistics, format_table};
use super::errors::DemoError;
use super::generate::{random_array, random_table, shuffled_chain};
use super::runner::{run_array, run_chain, run_table};
use crate::engine::{Round, RoundObserver};
use crate::model::{LinkedChain, RowTable, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::state::Statistics;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

const EXIT_CHOICE: usize = 4;

pub struct Session<R, W> {
    input: R,
    output: W,
    config: DemoConfig,
    rng: StdRng,
    stats: Statistics,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: DemoConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            input,
            output,
            config,
            rng,
            stats: Statistics::new(),
        }
    }

    /// Counters from the most recent demonstration.
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the main menu until the user picks Exit.
    pub fn run(&mut self) -> Result<(), DemoError> {
        writeln!(self.output, "Welcome to the Sorting Algorithms Demo!")?;
        writeln!(
            self.output,
            "Each algorithm is shown step by step, with comparison and movement counts."
        )?;

        loop {
            self.print_menu()?;
            let choice = self.prompt_choice(1, EXIT_CHOICE, "Enter your choice: ")?;
            let structure = match choice {
                1 => Structure::Array,
                2 => Structure::Chain,
                3 => Structure::Table,
                _ => {
                    writeln!(
                        self.output,
                        "Thank you for using the sorting algorithms demo!"
                    )?;
                    return Ok(());
                }
            };
            self.interactive_demo(structure)?;
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Sorting Algorithms Demonstration ===")?;
        writeln!(self.output, "Choose a data structure to test:")?;
        writeln!(self.output, "1. Array Sorting")?;
        writeln!(self.output, "2. Linked List Sorting")?;
        writeln!(self.output, "3. Matrix Sorting")?;
        writeln!(self.output, "4. Exit")?;
        writeln!(self.output, "=========================================")
    }

    /// Ask until the user enters an integer in `min..=max`.
    ///
    /// Fails only if the input ends or cannot be read.
    pub fn prompt_choice(
        &mut self,
        min: usize,
        max: usize,
        prompt: &str,
    ) -> Result<usize, DemoError> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(DemoError::InputClosed);
            }

            // Undecodable bytes become U+FFFD and fail the parse below.
            let line = String::from_utf8_lossy(&buf);
            match line.trim().parse::<usize>() {
                Ok(choice) if (min..=max).contains(&choice) => return Ok(choice),
                Ok(choice) => {
                    warn!(choice, min, max, "choice out of range");
                    writeln!(
                        self.output,
                        "Invalid input! Please enter a number between {} and {}.",
                        min, max
                    )?;
                }
                Err(_) => {
                    warn!(input = line.trim(), "choice is not a number");
                    writeln!(self.output, "Invalid input! Please enter a valid number.")?;
                }
            }
        }
    }

    fn interactive_demo(&mut self, structure: Structure) -> Result<(), DemoError> {
        writeln!(self.output)?;
        writeln!(self.output, "=== {} Sorting Demonstration ===", structure)?;

        let size = match structure {
            Structure::Array => {
                let prompt = format!(
                    "Enter array size ({}-{}): ",
                    MIN_ARRAY_SIZE, MAX_ARRAY_SIZE
                );
                self.prompt_choice(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE, &prompt)?
            }
            Structure::Chain | Structure::Table => 0,
        };

        let algorithms = Algorithm::for_structure(structure);
        writeln!(self.output)?;
        writeln!(self.output, "Choose sorting algorithm:")?;
        for (number, algorithm) in algorithms.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, algorithm)?;
        }
        let choice = self.prompt_choice(1, algorithms.len(), "Enter your choice: ")?;

        self.demonstrate(structure, algorithms[choice - 1], size)?;
        Ok(())
    }

    /// Generate fresh data for `structure`, sort it with `algorithm` and
    /// report every round and the final counters.
    ///
    /// `size` is the array length and is ignored for chains and tables, whose
    /// sizes are fixed by the sample words and the configured table shape.
    pub fn demonstrate(
        &mut self,
        structure: Structure,
        algorithm: Algorithm,
        size: usize,
    ) -> Result<Statistics, DemoError> {
        if !algorithm.supports(structure) {
            return Err(DemoError::Unsupported {
                structure,
                algorithm,
            });
        }
        if structure == Structure::Array && !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
            return Err(DemoError::InvalidSize {
                size,
                min: MIN_ARRAY_SIZE,
                max: MAX_ARRAY_SIZE,
            });
        }

        info!(%structure, %algorithm, "starting demonstration");
        self.stats.reset();

        match structure {
            Structure::Array => {
                let mut values = random_array(&mut self.rng, size, self.config.max_value);
                self.sort_array(&mut values, algorithm)?;
            }
            Structure::Chain => {
                let mut words = shuffled_chain(&mut self.rng);
                self.sort_chain(&mut words, algorithm)?;
            }
            Structure::Table => {
                let mut rows = random_table(&mut self.rng, self.config.table_shape);
                self.sort_table(&mut rows, algorithm)?;
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", format_statistics(&self.stats))?;
        info!(stats = %self.stats, "demonstration complete");
        Ok(self.stats.clone())
    }

    fn sort_array(&mut self, values: &mut [i32], algorithm: Algorithm) -> Result<(), DemoError> {
        let before = format_array(values);
        writeln!(self.output, "\nArray before sorting: {}", before)?;
        writeln!(self.output, "\n=== {} ===", algorithm)?;

        let mut printer =
            RoundPrinter::<_, [i32]>::new(&mut self.output, format_array, self.config.quiet);
        run_array(values, algorithm, &mut self.stats, &mut printer)?;
        printer.finish()?;

        let after = format_array(values);
        writeln!(self.output, "\nArray after sorting: {}", after)?;
        Ok(())
    }

    fn sort_chain(
        &mut self,
        words: &mut LinkedChain,
        algorithm: Algorithm,
    ) -> Result<(), DemoError> {
        let before = format_chain(words);
        writeln!(self.output, "\nLinked list before sorting: {}", before)?;
        writeln!(self.output, "\n=== {} for Linked List ===", algorithm)?;

        let mut printer =
            RoundPrinter::<_, LinkedChain>::new(&mut self.output, format_chain, self.config.quiet);
        run_chain(words, algorithm, &mut self.stats, &mut printer)?;
        printer.finish()?;

        let after = format_chain(words);
        writeln!(self.output, "\nLinked list after sorting: {}", after)?;
        Ok(())
    }

    fn sort_table(&mut self, rows: &mut RowTable, algorithm: Algorithm) -> Result<(), DemoError> {
        let before = format_table(rows);
        writeln!(self.output, "\nMatrix before sorting:\n{}", before)?;
        writeln!(self.output, "\n=== {} for Matrix ===", algorithm)?;

        let mut printer =
            RoundPrinter::<_, RowTable>::new(&mut self.output, format_table, self.config.quiet);
        run_table(rows, algorithm, &mut self.stats, &mut printer)?;
        printer.finish()?;

        let after = format_table(rows);
        writeln!(self.output, "\nMatrix after sorting:\n{}", after)?;
        Ok(())
    }
}

/// Observer that writes each round to the session output.
///
/// The first write error is kept and every later round is skipped; the caller
/// collects it with `finish` once the sort returns.
struct RoundPrinter<'a, W, T: ?Sized> {
    output: &'a mut W,
    render: fn(&T) -> String,
    quiet: bool,
    result: io::Result<()>,
}

impl<'a, W: Write, T: ?Sized> RoundPrinter<'a, W, T> {
    fn new(output: &'a mut W, render: fn(&T) -> String, quiet: bool) -> Self {
        Self {
            output,
            render,
            quiet,
            result: Ok(()),
        }
    }

    fn finish(self) -> io::Result<()> {
        self.result
    }
}

impl<W: Write, T: ?Sized> RoundObserver<T> for RoundPrinter<'_, W, T> {
    fn on_round(&mut self, round: &Round, snapshot: &T) {
        if self.quiet || self.result.is_err() {
            return;
        }
        let rendered = (self.render)(snapshot);
        self.result = writeln!(self.output, "{}", format_round(round, &rendered));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let config = DemoConfig {
            seed: Some(42),
            ..DemoConfig::default()
        };
        Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), config)
    }

    #[test]
    fn test_prompt_choice_reprompts() {
        let mut s = session("abc\n9\n2\n");
        let choice = s.prompt_choice(1, 4, "> ").unwrap();
        assert_eq!(choice, 2);

        let text = String::from_utf8(s.into_output()).unwrap();
        assert!(text.contains("Please enter a valid number."));
        assert!(text.contains("Please enter a number between 1 and 4."));
        assert_eq!(text.matches("> ").count(), 3);
    }

    #[test]
    fn test_prompt_choice_reprompts_after_invalid_utf8() {
        let mut script = vec![0xff, 0xfe, b'\n'];
        script.extend_from_slice(b"4\n");
        let config = DemoConfig {
            seed: Some(42),
            ..DemoConfig::default()
        };
        let mut s = Session::new(Cursor::new(script), Vec::new(), config);

        assert!(s.run().is_ok());
        let text = String::from_utf8(s.into_output()).unwrap();
        assert!(text.contains("Please enter a valid number."));
        assert!(text.ends_with("Thank you for using the sorting algorithms demo!\n"));
    }

    #[test]
    fn test_prompt_choice_input_closed() {
        let mut s = session("");
        assert!(matches!(
            s.prompt_choice(1, 4, "> "),
            Err(DemoError::InputClosed)
        ));
    }

    #[test]
    fn test_demonstrate_rejects_bad_requests() {
        let mut s = session("");
        assert!(matches!(
            s.demonstrate(Structure::Table, Algorithm::Quick, 0),
            Err(DemoError::Unsupported { .. })
        ));
        assert!(matches!(
            s.demonstrate(Structure::Array, Algorithm::Quick, 2),
            Err(DemoError::InvalidSize { size: 2, .. })
        ));
    }
}
