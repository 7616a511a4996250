//! Validation pipeline and field extraction.

use chrono::NaiveDate;

use crate::calendar::{base_year, days_in_month, resolve_year};
use crate::fields::Fields;
use crate::{
    luhn, CitizenshipStatus, Clock, DecodeResult, Gender, IdDetails, IdNumber, InvalidReason,
    SystemClock, DEFAULT_MAX_AGE, ID_LENGTH, PAYLOAD_LENGTH,
};

/// How the day digits are checked against the month length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DayCheck {
    /// `1 <= day <= days in month`.
    #[default]
    Range,

    /// `day == days in month`, so only the last day of a month passes.
    LastDayOnly,
}

impl DayCheck {
    fn accepts(&self, day: u32, days_in_month: u32) -> bool {
        match self {
            Self::Range => (1..=days_in_month).contains(&day),
            Self::LastDayOnly => day == days_in_month,
        }
    }
}

/// Validates and decodes identity numbers.
///
/// Holds no mutable state; one decoder can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Decoder<C = SystemClock> {
    max_age: u32,
    day_check: DayCheck,
    clock: C,
}

impl Decoder<SystemClock> {
    /// Decoder with the default max age, range day check and system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            day_check: DayCheck::default(),
            clock: SystemClock,
        }
    }
}

impl Default for Decoder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

/// A value that passed every check, with its resolved birth year.
struct Checked<'a> {
    digits: &'a str,
    fields: Fields,
    year: i32,
}

impl<C: Clock> Decoder<C> {
    /// Sets the oldest plausible age used to resolve the birth year.
    #[must_use]
    pub fn with_max_age(mut self, max_age: u32) -> Self {
        self.max_age = max_age;
        self
    }

    #[must_use]
    pub fn with_day_check(mut self, day_check: DayCheck) -> Self {
        self.day_check = day_check;
        self
    }

    /// Replaces the source of "today".
    #[must_use]
    pub fn with_clock<D: Clock>(self, clock: D) -> Decoder<D> {
        Decoder {
            max_age: self.max_age,
            day_check: self.day_check,
            clock,
        }
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn day_check(&self) -> DayCheck {
        self.day_check
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Runs the validation checks and reports the first one that fails.
    pub fn validate<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<(), InvalidReason> {
        self.check(input.into()).map(|_| ())
    }

    /// Validates `input` and, if it passes, extracts the encoded facts.
    pub fn decode<'a>(&self, input: impl Into<Option<&'a str>>) -> DecodeResult {
        self.check(input.into()).and_then(extract).into()
    }

    fn check<'a>(&self, input: Option<&'a str>) -> Result<Checked<'a>, InvalidReason> {
        let digits = match input.map(str::trim) {
            None | Some("") => return Err(InvalidReason::InputBlank),
            Some(trimmed) => trimmed,
        };

        if digits.len() != ID_LENGTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidReason::Not13Digits);
        }

        let fields = Fields::slice(digits);

        // Month 00 passes here and is rejected by the day check.
        if fields.month > 12 {
            return Err(InvalidReason::InvalidMonthDigits);
        }

        let year = resolve_year(
            fields.year,
            base_year(self.clock.current_year(), self.max_age),
        );
        let days = days_in_month(year, fields.month).ok_or(InvalidReason::InvalidDaysDigits)?;
        if !self.day_check.accepts(fields.day, days) {
            return Err(InvalidReason::InvalidDaysDigits);
        }
        // days_in_month only succeeds for years chrono can represent.
        let year = i32::try_from(year).map_err(|_| InvalidReason::InvalidDaysDigits)?;

        if luhn::compute(&digits.as_bytes()[..PAYLOAD_LENGTH]) != fields.check_digit {
            return Err(InvalidReason::CheckDigitVerificationFailed);
        }

        Ok(Checked {
            digits,
            fields,
            year,
        })
    }
}

fn extract(checked: Checked<'_>) -> Result<IdDetails, InvalidReason> {
    let Checked {
        digits,
        fields,
        year,
    } = checked;
    let date_of_birth = NaiveDate::from_ymd_opt(year, fields.month, fields.day)
        .ok_or(InvalidReason::InvalidDaysDigits)?;

    Ok(IdDetails {
        id_number: IdNumber::new_unchecked(digits.to_string()),
        date_of_birth,
        gender: Gender::from_sequence(fields.sequence),
        citizenship_status: CitizenshipStatus::from_digit(fields.citizenship),
    })
}

/// Decodes `input` against the system clock.
///
/// `input` may be `None`, which is reported as [`InvalidReason::InputBlank`].
pub fn decode<'a>(input: impl Into<Option<&'a str>>, max_age: u32) -> DecodeResult {
    Decoder::new().with_max_age(max_age).decode(input)
}

/// Validates `input` against the system clock.
pub fn validate<'a>(input: impl Into<Option<&'a str>>, max_age: u32) -> Result<(), InvalidReason> {
    Decoder::new().with_max_age(max_age).validate(input)
}

// =============================================================================
// Tests
// =============================================================================
