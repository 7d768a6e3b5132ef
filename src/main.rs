//! Binary entry point for Larder.
//!
//! Larder: interactive food inventory tracker.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use larder::cli::output::{OutputFormat, format_error};
use larder::cli::{Cli, execute};
use larder::error::{Error, IoError};
use larder::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Output closed early (e.g. piped to `head`)
        Err(Error::Io(IoError::OutputClosed)) => ExitCode::SUCCESS,
        Err(e) => {
            let error_output = format_error(&e, cli.format);
            match cli.format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    println!("{error_output}");
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
