//! Decoded ID data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{IdNumber, InvalidReason, MALE_SEQUENCE_START};

// =============================================================================
// Tags
// =============================================================================

/// Gender encoded by the sequence digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Sequences `0..5000` are female, `5000..` male.
    pub const fn from_sequence(sequence: u16) -> Self {
        if sequence >= MALE_SEQUENCE_START {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// First sequence number of this gender's band.
    pub const fn first_sequence(&self) -> u16 {
        match self {
            Self::Female => 0,
            Self::Male => MALE_SEQUENCE_START,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Female => "FEMALE",
            Self::Male => "MALE",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Citizenship encoded by the eleventh digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CitizenshipStatus {
    Citizen,
    PermanentResident,
}

impl CitizenshipStatus {
    /// `0` is a citizen, any other digit a permanent resident.
    pub const fn from_digit(digit: u8) -> Self {
        if digit == 0 {
            Self::Citizen
        } else {
            Self::PermanentResident
        }
    }

    /// Canonical digit written when composing an ID.
    pub const fn digit(&self) -> u8 {
        match self {
            Self::Citizen => 0,
            Self::PermanentResident => 1,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Citizen => "CITIZEN",
            Self::PermanentResident => "PERMANENT_RESIDENT",
        }
    }
}

impl std::fmt::Display for CitizenshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Decode Result
// =============================================================================

/// Facts extracted from a valid ID number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdDetails {
    /// The trimmed input.
    pub id_number: IdNumber,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub citizenship_status: CitizenshipStatus,
}

/// Outcome of decoding one input.
///
/// Holds either an [`InvalidReason`] or the [`IdDetails`], never both and
/// never neither. Serializes flat:
///
/// ```json
/// { "valid": false, "invalid_reason": "NOT_13_DIGITS" }
/// { "valid": true, "id_number": "...", "date_of_birth": "1980-01-01", "gender": "MALE", "citizenship_status": "CITIZEN" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodeResult(Result<IdDetails, InvalidReason>);

impl DecodeResult {
    /// A successful decode.
    #[must_use]
    pub fn valid(details: IdDetails) -> Self {
        Self(Ok(details))
    }

    /// A failed decode.
    #[must_use]
    pub fn invalid(reason: InvalidReason) -> Self {
        Self(Err(reason))
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_ok()
    }

    /// Why the input was rejected. `None` is the only success signal.
    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        self.0.as_ref().err().copied()
    }

    pub fn details(&self) -> Option<&IdDetails> {
        self.0.as_ref().ok()
    }

    pub fn id_number(&self) -> Option<&IdNumber> {
        self.details().map(|d| &d.id_number)
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.details().map(|d| d.date_of_birth)
    }

    pub fn gender(&self) -> Option<Gender> {
        self.details().map(|d| d.gender)
    }

    pub fn citizenship_status(&self) -> Option<CitizenshipStatus> {
        self.details().map(|d| d.citizenship_status)
    }

    /// Borrows the outcome as a `Result`.
    pub fn as_result(&self) -> Result<&IdDetails, InvalidReason> {
        self.0.as_ref().map_err(|reason| *reason)
    }

    /// Converts into a `Result`, for use with `?`.
    pub fn into_result(self) -> Result<IdDetails, InvalidReason> {
        self.0
    }
}

impl From<Result<IdDetails, InvalidReason>> for DecodeResult {
    fn from(result: Result<IdDetails, InvalidReason>) -> Self {
        Self(result)
    }
}

impl From<DecodeResult> for Result<IdDetails, InvalidReason> {
    fn from(result: DecodeResult) -> Self {
        result.0
    }
}

impl Serialize for DecodeResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        match &self.0 {
            Ok(details) => {
                let mut state = serializer.serialize_struct("DecodeResult", 5)?;
                state.serialize_field("valid", &true)?;
                state.serialize_field("id_number", &details.id_number)?;
                state.serialize_field("date_of_birth", &details.date_of_birth)?;
                state.serialize_field("gender", &details.gender)?;
                state.serialize_field("citizenship_status", &details.citizenship_status)?;
                state.end()
            }
            Err(reason) => {
                let mut state = serializer.serialize_struct("DecodeResult", 2)?;
                state.serialize_field("valid", &false)?;
                state.serialize_field("invalid_reason", reason)?;
                state.end()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
