//! # zaid-id
//!
//! Validation and decoding of South African national identity numbers.
//!
//! ## ID Format
//!
//! An identity number is 13 ASCII digits: `YYMMDD SSSS C A Z`
//!
//! - `YYMMDD` - date of birth, with the century resolved against a sliding
//!   window anchored at "current year minus max age"
//! - `SSSS` - gender sequence, `0000-4999` female, `5000-9999` male
//! - `C` - citizenship, `0` citizen, anything else permanent resident
//! - `A` - legacy indicator, ignored
//! - `Z` - Luhn check digit over the first 12 digits
//!
//! ## Validation Order
//!
//! Checks run in a fixed order and stop at the first failure, so a string
//! that fails several checks always reports the earliest one:
//!
//! 1. blank input ([`InvalidReason::InputBlank`])
//! 2. not 13 digits ([`InvalidReason::Not13Digits`])
//! 3. month above 12 ([`InvalidReason::InvalidMonthDigits`])
//! 4. day not in the month ([`InvalidReason::InvalidDaysDigits`])
//! 5. check digit mismatch ([`InvalidReason::CheckDigitVerificationFailed`])
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use zaid_id::{Decoder, FixedClock, Gender, InvalidReason};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let decoder = Decoder::new().with_clock(FixedClock::new(today));
//!
//! let result = decoder.decode("8001015009083");
//! assert!(result.is_valid());
//! assert_eq!(result.gender(), Some(Gender::Male));
//!
//! let result = decoder.decode("1234567890123");
//! assert_eq!(result.invalid_reason(), Some(InvalidReason::InvalidMonthDigits));
//! ```

pub mod calendar;
mod clock;
mod compose;
mod decoder;
mod error;
mod fields;
pub mod luhn;
mod number;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use compose::{compose, IdComponents};
pub use decoder::{decode, validate, DayCheck, Decoder};
pub use error::{ComposeError, InvalidReason};
pub use number::IdNumber;
pub use types::*;

/// Oldest plausible age used to resolve the two-digit birth year.
pub const DEFAULT_MAX_AGE: u32 = 100;

/// First gender sequence number that encodes [`Gender::Male`].
pub const MALE_SEQUENCE_START: u16 = 5000;

/// Number of digits in an identity number.
pub const ID_LENGTH: usize = 13;

/// Number of digits covered by the check digit.
pub const PAYLOAD_LENGTH: usize = 12;
