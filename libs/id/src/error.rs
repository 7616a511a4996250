//! Error types for ID validation and composition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an identity number fails validation.
///
/// Variants are declared in the order the checks run, so `Ord` follows
/// pipeline position rather than severity.
#[derive(
    Debug, Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvalidReason {
    /// The input was not provided or is blank.
    #[error("ID number is missing or blank")]
    InputBlank,

    /// The trimmed input is not exactly 13 ASCII digits.
    #[error("ID number is not a 13 digit string")]
    #[serde(rename = "NOT_13_DIGITS")]
    Not13Digits,

    /// The month digits are above 12.
    #[error("month digits are out of range")]
    InvalidMonthDigits,

    /// The day digits do not fit the month in the resolved year.
    #[error("day digits do not fit the month")]
    InvalidDaysDigits,

    /// The last digit does not match the Luhn check digit.
    #[error("check digit verification failed")]
    CheckDigitVerificationFailed,
}

impl InvalidReason {
    /// All reasons in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::InputBlank,
        Self::Not13Digits,
        Self::InvalidMonthDigits,
        Self::InvalidDaysDigits,
        Self::CheckDigitVerificationFailed,
    ];

    /// Stable reason code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InputBlank => "INPUT_BLANK",
            Self::Not13Digits => "NOT_13_DIGITS",
            Self::InvalidMonthDigits => "INVALID_MONTH_DIGITS",
            Self::InvalidDaysDigits => "INVALID_DAYS_DIGITS",
            Self::CheckDigitVerificationFailed => "CHECK_DIGIT_VERIFICATION_FAILED",
        }
    }

    /// Returns true if the input never reached the field checks.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InputBlank | Self::Not13Digits)
    }

    /// Returns true if the date of birth digits were rejected.
    pub fn is_date_error(&self) -> bool {
        matches!(self, Self::InvalidMonthDigits | Self::InvalidDaysDigits)
    }
}

/// Errors that can occur when composing an ID number from its parts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// The gender sequence does not fit in four digits.
    #[error("gender sequence {0} does not fit in four digits")]
    SequenceOutOfRange(u16),

    /// The legacy indicator is not a single digit.
    #[error("legacy digit {0} is not a single digit")]
    LegacyDigitOutOfRange(u8),
}
