//! Building ID numbers from their parts.

use chrono::{Datelike, NaiveDate};

use crate::{luhn, CitizenshipStatus, ComposeError, Gender};

/// Legacy indicator digit written by [`IdComponents::new`].
const DEFAULT_LEGACY_DIGIT: u8 = 8;

/// The encodable parts of an identity number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdComponents {
    pub date_of_birth: NaiveDate,
    /// Gender sequence, `0..=9999`.
    pub sequence: u16,
    pub citizenship: CitizenshipStatus,
    /// Legacy indicator, `0..=9`.
    pub legacy_digit: u8,
}

impl IdComponents {
    /// Components using the first sequence number of `gender`'s band.
    pub fn new(date_of_birth: NaiveDate, gender: Gender, citizenship: CitizenshipStatus) -> Self {
        Self {
            date_of_birth,
            sequence: gender.first_sequence(),
            citizenship,
            legacy_digit: DEFAULT_LEGACY_DIGIT,
        }
    }

    #[must_use]
    pub fn with_sequence(mut self, sequence: u16) -> Self {
        self.sequence = sequence;
        self
    }

    #[must_use]
    pub fn with_legacy_digit(mut self, legacy_digit: u8) -> Self {
        self.legacy_digit = legacy_digit;
        self
    }

    pub fn gender(&self) -> Gender {
        Gender::from_sequence(self.sequence)
    }
}

/// Writes `components` as a 13-digit ID with a correct check digit.
///
/// Only the last two digits of the birth year are encoded, so decoding the
/// result gives back the same date only when the year falls inside the
/// decoder's window.
pub fn compose(components: &IdComponents) -> Result<String, ComposeError> {
    if components.sequence > 9999 {
        return Err(ComposeError::SequenceOutOfRange(components.sequence));
    }
    if components.legacy_digit > 9 {
        return Err(ComposeError::LegacyDigitOutOfRange(components.legacy_digit));
    }

    let dob = components.date_of_birth;
    let payload = format!(
        "{:02}{:02}{:02}{:04}{}{}",
        dob.year().rem_euclid(100),
        dob.month(),
        dob.day(),
        components.sequence,
        components.citizenship.digit(),
        components.legacy_digit,
    );
    let check = luhn::compute(payload.as_bytes());

    Ok(format!("{payload}{check}"))
}
