//! zaidctl (zaid) - CLI for South African identity numbers
//!
//! Decodes one ID number per invocation and renders the result as a table or
//! JSON. Exit status is 0 for a valid ID, 1 for an invalid one and 2 when the
//! command itself fails.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    config::init_tracing(cli.log_format());

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            // Print error in a user-friendly way
            error::print_error(&e);
            ExitCode::from(2)
        }
    }
}
