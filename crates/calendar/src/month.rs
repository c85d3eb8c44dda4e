//! Year/month cursor with carry-normalized navigation.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::date::days_in_month;
use crate::error::CalendarError;
use crate::key::DayKey;

/// A calendar month: the position of a day-grid view.
///
/// Ordered chronologically. Navigation saturates at the ends of the
/// supported calendar range, so every `YearMonth` has a valid first and
/// last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
    /// [`CalendarError::InvalidDate`] if `year` is outside the supported range.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if !(min_year()..=max_year()).contains(&year) {
            return Err(CalendarError::InvalidDate {
                input: format!("{year}-{month:02}"),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `key`.
    pub fn of(key: DayKey) -> Self {
        let date = key.naive();
        Self {
            year: date.year(),
            month: date.month() as u8,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Moves by `delta` months, carrying overflow into the year.
    ///
    /// December + 1 is January of the following year; January - 1 is
    /// December of the previous year.
    pub fn shift_months(self, delta: i32) -> Self {
        let lo = i64::from(min_year()) * 12;
        let hi = i64::from(max_year()) * 12 + 11;
        let index = (self.index() + i64::from(delta)).clamp(lo, hi);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u8 + 1,
        }
    }

    /// Moves by `delta` years, keeping the month.
    pub fn shift_years(self, delta: i32) -> Self {
        self.shift_months(delta.saturating_mul(12))
    }

    /// Replaces the year, keeping the month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if `year` is outside the supported range.
    pub fn with_year(self, year: i32) -> Result<Self, CalendarError> {
        Self::new(year, self.month)
    }

    /// Replaces the month, keeping the year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn with_month(self, month: u8) -> Result<Self, CalendarError> {
        Self::new(self.year, month)
    }

    /// Returns the number of days in this month.
    pub fn days(self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Returns the key of the first day of this month.
    pub fn first_day(self) -> DayKey {
        self.day(1)
    }

    /// Returns the key of the last day of this month.
    pub fn last_day(self) -> DayKey {
        self.day(self.days())
    }

    /// Returns `true` if `key` falls in this month.
    pub fn contains(self, key: DayKey) -> bool {
        Self::of(key) == self
    }

    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn day(self, day: u8) -> DayKey {
        // Year is kept within chrono's range by every constructor.
        let date = NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(day))
            .expect("YearMonth always lies within chrono's date range");
        DayKey::from_naive(date)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

fn min_year() -> i32 {
    NaiveDate::MIN.year()
}

fn max_year() -> i32 {
    NaiveDate::MAX.year()
}
