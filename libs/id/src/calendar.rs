//! Birth-year window and month lengths.

use chrono::NaiveDate;

/// First year of the window for a given "now" and maximum age.
pub fn base_year(current_year: i32, max_age: u32) -> i64 {
    i64::from(current_year) - i64::from(max_age)
}

/// Resolves a two-digit year to the smallest year `>= base_year` ending in
/// those digits.
///
/// `two_digit` is taken modulo 100.
pub fn resolve_year(two_digit: u32, base_year: i64) -> i64 {
    let candidate = base_year.div_euclid(100) * 100 + i64::from(two_digit % 100);
    if candidate < base_year {
        candidate + 100
    } else {
        candidate
    }
}

/// Number of days in `month` of `year` in the proleptic Gregorian calendar.
///
/// Returns `None` for months outside `1..=12` and for years chrono cannot
/// represent.
pub fn days_in_month(year: i64, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let year = i32::try_from(year).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_year_window() {
        // 2024 with max age 100 covers 1924..=2023
        let base = base_year(2024, 100);
        assert_eq!(base, 1924);
        assert_eq!(resolve_year(80, base), 1980);
        assert_eq!(resolve_year(24, base), 1924);
        assert_eq!(resolve_year(23, base), 2023);
        assert_eq!(resolve_year(0, base), 2000);
        assert_eq!(resolve_year(99, base), 1999);
    }

    #[test]
    fn test_resolve_year_narrow_window() {
        let base = base_year(2024, 50);
        assert_eq!(resolve_year(74, base), 1974);
        assert_eq!(resolve_year(73, base), 2073);
        assert_eq!(resolve_year(12, base), 2012);
    }

    #[test]
    fn test_resolve_year_zero_age() {
        let base = base_year(2024, 0);
        assert_eq!(resolve_year(24, base), 2024);
        assert_eq!(resolve_year(23, base), 2123);
    }

    #[test]
    fn test_resolve_year_negative_base() {
        let base = base_year(2024, 3000);
        assert_eq!(base, -976);
        assert_eq!(resolve_year(50, base), -950);
        assert_eq!(resolve_year(10, base), -890);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1), Some(31));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
        assert_eq!(days_in_month(i64::from(i32::MAX) + 1, 1), None);
        assert_eq!(days_in_month(10_000_000, 1), None);
    }
}
