//! Decode command.

use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use tracing::debug;
use zaid_id::{Clock, DayCheck, DecodeResult, DEFAULT_MAX_AGE};

use crate::config::DecodeSettings;
use crate::output::print_decode_result;

use super::CommandContext;

/// Decode command - validate one ID number and extract its fields.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// ID number. Surrounding whitespace is ignored; omitting it reports
    /// INPUT_BLANK.
    id: Option<String>,

    /// Oldest plausible age, used to choose the century of the birth year.
    #[arg(long, env = "ZAID_MAX_AGE", default_value_t = DEFAULT_MAX_AGE)]
    max_age: u32,

    /// Decode as if today were this date (YYYY-MM-DD).
    #[arg(long, env = "ZAID_TODAY", value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Only accept the last day of the month in the day digits.
    #[arg(long)]
    last_day_only: bool,
}

impl DecodeCommand {
    fn settings(&self) -> DecodeSettings {
        DecodeSettings {
            max_age: self.max_age,
            today: self.today,
            day_check: if self.last_day_only {
                DayCheck::LastDayOnly
            } else {
                DayCheck::Range
            },
        }
    }

    fn decode(&self) -> DecodeResult {
        let settings = self.settings();
        let decoder = settings.decoder();
        debug!(
            max_age = settings.max_age,
            today = %decoder.clock().today(),
            day_check = ?settings.day_check,
            "Decoder configured"
        );

        let result = decoder.decode(self.id.as_deref());
        match result.invalid_reason() {
            None => debug!("ID number accepted"),
            Some(reason) => debug!(reason = reason.code(), "ID number rejected"),
        }
        result
    }

    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let result = self.decode();
        print_decode_result(&result, ctx.format);

        Ok(if result.is_valid() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
