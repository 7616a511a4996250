//! Validated ID number newtype.

use crate::{Clock, Decoder, InvalidReason};

/// A trimmed 13-digit string that passed every validation check.
///
/// Serializes as a plain string. Deserializing re-runs validation with the
/// default [`Decoder`], so the birth-year window follows the system clock.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdNumber(String);

impl IdNumber {
    /// Parses with the default decoder settings.
    pub fn parse(s: &str) -> Result<Self, InvalidReason> {
        Self::parse_with(&Decoder::new(), s)
    }

    /// Parses using `decoder`'s max age, day rule and clock.
    pub fn parse_with<C: Clock>(decoder: &Decoder<C>, s: &str) -> Result<Self, InvalidReason> {
        decoder.validate(s)?;
        Ok(Self(s.trim().to_string()))
    }

    /// Wraps digits the caller has already validated.
    pub(crate) fn new_unchecked(digits: String) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six date of birth digits, `YYMMDD`.
    pub fn birth_digits(&self) -> &str {
        &self.0[..6]
    }

    /// The four gender sequence digits.
    pub fn sequence_digits(&self) -> &str {
        &self.0[6..10]
    }

    /// The Luhn check digit.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[crate::ID_LENGTH - 1] - b'0'
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for IdNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for IdNumber {
    type Err = InvalidReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for IdNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<IdNumber> for String {
    fn from(id: IdNumber) -> Self {
        id.0
    }
}

impl serde::Serialize for IdNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for IdNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::FixedClock;

    fn decoder() -> Decoder<FixedClock> {
        Decoder::new().with_clock(FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        ))
    }

    #[test]
    fn test_parse_trims() {
        let id = IdNumber::parse_with(&decoder(), "  8001015009083\t").unwrap();
        assert_eq!(id.as_str(), "8001015009083");
        assert_eq!(id.to_string(), "8001015009083");
    }

    #[test]
    fn test_parse_rejects_with_reason() {
        assert_eq!(
            IdNumber::parse_with(&decoder(), "123"),
            Err(InvalidReason::Not13Digits)
        );
        assert_eq!(
            IdNumber::parse_with(&decoder(), "8001015009084"),
            Err(InvalidReason::CheckDigitVerificationFailed)
        );
    }

    #[test]
    fn test_from_str() {
        let result: Result<IdNumber, _> = "".parse();
        assert_eq!(result, Err(InvalidReason::InputBlank));
    }

    #[test]
    fn test_digit_accessors() {
        let id = IdNumber::parse_with(&decoder(), "8507155123185").unwrap();
        assert_eq!(id.birth_digits(), "850715");
        assert_eq!(id.sequence_digits(), "5123");
        assert_eq!(id.check_digit(), 5);
    }

    #[test]
    fn test_json_roundtrip() {
        // 1980 is inside any plausible system-clock window.
        let id = IdNumber::parse_with(&decoder(), "8001015009083").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"8001015009083\"");
        let parsed: IdNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_json_rejects_invalid() {
        let result: Result<IdNumber, _> = serde_json::from_str("\"1234567890123\"");
        assert!(result.is_err());
    }
}
