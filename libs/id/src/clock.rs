//! Source of "today" for two-digit year resolution.

use chrono::{Datelike, Local, NaiveDate};

/// Provides the current date to the decoder.
///
/// The sliding birth-year window is the only input to decoding that is not
/// part of the ID itself. Pin it with [`FixedClock`] for reproducible results.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;

    /// The current calendar year.
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Reads the host's local date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock pinned to `today`.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl From<NaiveDate> for FixedClock {
    fn from(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
