//! CLI entry point for colmask.
//!
//! Parses command-line arguments with clap, runs the masking pipeline and
//! maps failures to exit code 1. Logging is initialised first so every
//! failure is reported through `tracing` before the process exits.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use colmask_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    run_cli(cli).context("failed to mask CSV file")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Mask(mask) => Some(mask.code()),
                _ => None,
            });
        let code_field = code.map(|code| field::display(code.as_str()));

        let chain = format!("{err:#}");

        error!(error = %chain, code = code_field, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
