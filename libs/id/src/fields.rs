//! Fixed-position fields of a 13-digit ID.

use std::ops::Range;

const YEAR: Range<usize> = 0..2;
const MONTH: Range<usize> = 2..4;
const DAY: Range<usize> = 4..6;
const SEQUENCE: Range<usize> = 6..10;
const CITIZENSHIP: Range<usize> = 10..11;
const LEGACY: Range<usize> = 11..12;
const CHECK_DIGIT: Range<usize> = 12..13;

/// Numeric values of each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub sequence: u16,
    pub citizenship: u8,
    pub legacy: u8,
    pub check_digit: u8,
}

impl Fields {
    /// Slices `digits`, which must already be 13 ASCII digits.
    pub fn slice(digits: &str) -> Self {
        let bytes = digits.as_bytes();
        debug_assert_eq!(bytes.len(), crate::ID_LENGTH);
        Self {
            year: number(bytes, YEAR),
            month: number(bytes, MONTH),
            day: number(bytes, DAY),
            sequence: number(bytes, SEQUENCE) as u16,
            citizenship: number(bytes, CITIZENSHIP) as u8,
            legacy: number(bytes, LEGACY) as u8,
            check_digit: number(bytes, CHECK_DIGIT) as u8,
        }
    }
}

fn number(bytes: &[u8], range: Range<usize>) -> u32 {
    bytes[range]
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice() {
        let fields = Fields::slice("8507155123185");
        assert_eq!(
            fields,
            Fields {
                year: 85,
                month: 7,
                day: 15,
                sequence: 5123,
                citizenship: 1,
                legacy: 8,
                check_digit: 5,
            }
        );
    }

    #[test]
    fn test_slice_leading_zeros() {
        let fields = Fields::slice("0002290001086");
        assert_eq!(fields.year, 0);
        assert_eq!(fields.month, 2);
        assert_eq!(fields.day, 29);
        assert_eq!(fields.sequence, 1);
        assert_eq!(fields.citizenship, 0);
    }
}
