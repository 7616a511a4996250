//! CLI commands.

mod check_digit;
mod compose;
mod decode;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::LogFormat;
use crate::output::OutputFormat;

/// zaid - Validate and decode South African identity numbers.
#[derive(Debug, Parser)]
#[command(name = "zaid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Log format on stderr (text or json). Filter with ZAID_LOG.
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate one ID number and show what it encodes.
    Decode(decode::DecodeCommand),

    /// Compute the check digit for the first 12 digits of an ID number.
    CheckDigit(check_digit::CheckDigitCommand),

    /// Build an ID number from a date of birth, gender and citizenship.
    Compose(compose::ComposeCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.log_format)
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<ExitCode> {
        let ctx = CommandContext {
            format: OutputFormat::parse(&self.format),
        };

        match self.command {
            Commands::Decode(cmd) => cmd.run(&ctx),
            Commands::CheckDigit(cmd) => cmd.run(&ctx).map(|()| ExitCode::SUCCESS),
            Commands::Compose(cmd) => cmd.run(&ctx).map(|()| ExitCode::SUCCESS),
            Commands::Version => {
                println!("zaid {}", env!("CARGO_PKG_VERSION"));
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["zaid", "decode", "8001015009083", "--format", "json"])
            .unwrap();
        assert_eq!(OutputFormat::parse(&cli.format), OutputFormat::Json);
        assert_eq!(cli.log_format(), LogFormat::Text);
    }

    #[test]
    fn decode_id_is_optional() {
        assert!(Cli::try_parse_from(["zaid", "decode"]).is_ok());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["zaid", "batch"]).is_err());
    }
}
