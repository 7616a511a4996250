//! Luhn check digit.
//!
//! Digits are doubled starting from the second-to-last payload position and
//! moving left in steps of two. A doubled value above 9 is reduced to
//! `(doubled % 10) + 1`. The check digit brings the total to a multiple of 10.

/// Computes the check digit for `payload`.
///
/// Returns `None` if the payload is empty or contains anything other than
/// ASCII digits.
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(compute(payload.as_bytes()))
}

/// Check digit of bytes already known to be ASCII digits.
pub(crate) fn compute(ascii_digits: &[u8]) -> u8 {
    let len = ascii_digits.len();
    let sum: u32 = ascii_digits
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            // Positions len-2, len-4, ... are doubled.
            if (len - i) % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled % 10 + 1
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Returns true if the last digit of `number` is the check digit of the rest.
pub fn verify(number: &str) -> bool {
    let Some(last) = number.chars().last() else {
        return false;
    };
    let payload = &number[..number.len() - last.len_utf8()];
    match (check_digit(payload), last.to_digit(10)) {
        (Some(expected), Some(actual)) => u32::from(expected) == actual,
        _ => false,
    }
}
