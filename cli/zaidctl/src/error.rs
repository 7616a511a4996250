//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use zaid_id::{ComposeError, Gender};

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid payload '{payload}': {reason}")]
    InvalidPayload {
        payload: String,
        reason: &'static str,
    },

    #[error("Sequence {sequence:04} does not encode {gender}")]
    SequenceGenderMismatch { sequence: u16, gender: Gender },

    #[error("Cannot compose ID number: {0}")]
    Compose(#[from] ComposeError),
}

impl CliError {
    pub fn invalid_payload(payload: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidPayload {
            payload: payload.into(),
            reason,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidPayload { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass the first 12 digits of the ID number, without the check digit."
                        .yellow()
                );
            }
            CliError::SequenceGenderMismatch { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Female sequences are 0000-4999, male sequences 5000-9999.".yellow()
                );
            }
            CliError::Compose(_) => {}
        }
    }
}
