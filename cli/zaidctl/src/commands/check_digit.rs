//! Check digit command.

use anyhow::Result;
use clap::Args;
use zaid_id::{luhn, PAYLOAD_LENGTH};

use crate::error::CliError;
use crate::output::{print_info, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Check digit command - compute the 13th digit for a 12-digit payload.
#[derive(Debug, Args)]
pub struct CheckDigitCommand {
    /// The first 12 digits of an ID number.
    payload: String,
}

fn check_digit(payload: &str) -> Result<u8, CliError> {
    if payload.len() != PAYLOAD_LENGTH {
        return Err(CliError::invalid_payload(payload, "expected exactly 12 digits"));
    }
    luhn::check_digit(payload)
        .ok_or_else(|| CliError::invalid_payload(payload, "only digits 0-9 are allowed"))
}

impl CheckDigitCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let payload = self.payload.trim();
        let digit = check_digit(payload)?;
        let id_number = format!("{payload}{digit}");

        match ctx.format {
            OutputFormat::Json => {
                let out = serde_json::json!({
                    "payload": payload,
                    "check_digit": digit,
                    "id_number": id_number,
                });
                print_single(&out);
            }
            OutputFormat::Table => {
                print_success(&format!("Check digit: {digit}"));
                print_info(&format!("id_number: {id_number}"));
            }
        }

        Ok(())
    }
}
