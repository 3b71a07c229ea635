//! Command-line interface orchestration for colmask.
//!
//! A single command reads a CSV file, masks one named column and writes the
//! result next to the input unless an output path is given.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, default_output_path, run_cli};

#[cfg(test)]
mod test_helpers;
