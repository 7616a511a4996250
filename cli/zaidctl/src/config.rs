//! Configuration for the CLI.
//!
//! Handles:
//! - Log filter and format (stderr only, stdout carries results)
//! - Decoder settings resolved from flags and environment

use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zaid_id::{Clock, DayCheck, Decoder, FixedClock, SystemClock, DEFAULT_MAX_AGE};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ZAID_LOG";

/// Filter used when `ZAID_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Initialize tracing to stderr.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Decoder settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSettings {
    /// Oldest plausible age.
    pub max_age: u32,

    /// Pinned "today", if any. Defaults to the host's local date.
    pub today: Option<NaiveDate>,

    pub day_check: DayCheck,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            today: None,
            day_check: DayCheck::Range,
        }
    }
}

impl DecodeSettings {
    /// Build a decoder, reading the system clock once if no date is pinned.
    pub fn decoder(&self) -> Decoder<FixedClock> {
        let today = self.today.unwrap_or_else(|| SystemClock.today());
        Decoder::new()
            .with_max_age(self.max_age)
            .with_day_check(self.day_check)
            .with_clock(FixedClock::new(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Text);
    }

    #[test]
    fn test_settings_default() {
        let settings = DecodeSettings::default();
        assert_eq!(settings.max_age, 100);
        assert_eq!(settings.today, None);
        assert_eq!(settings.day_check, DayCheck::Range);
    }

    #[test]
    fn test_settings_pin_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let settings = DecodeSettings {
            max_age: 50,
            today: Some(today),
            day_check: DayCheck::LastDayOnly,
        };
        let decoder = settings.decoder();
        assert_eq!(decoder.clock().today(), today);
        assert_eq!(decoder.max_age(), 50);
        assert_eq!(decoder.day_check(), DayCheck::LastDayOnly);
    }
}
