//! Canonical day key: whole days since 1970-01-01 UTC.

use std::fmt;

use chrono::{Datelike, NaiveDate, Utc, Weekday};
use serde::Serialize;

use crate::date::{CalendarDate, IsoWeek};
use crate::error::CalendarError;

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Canonical identifier of one calendar day.
///
/// Two inputs map to the same key iff they denote the same UTC calendar day.
/// A `DayKey` always lies within chrono's representable date range, which
/// makes the conversion back to a [`CalendarDate`] infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DayKey(i32);

impl DayKey {
    /// Returns the key of a chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
    }

    /// Returns the key of a validated calendar date.
    pub fn from_date(date: CalendarDate) -> Self {
        Self::from_naive(date.naive())
    }

    /// Returns the key of `year`-`month`-`day`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the triple is not a valid calendar date.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        CalendarDate::new(year, month, day).map(Self::from_date)
    }

    /// Creates a key from a raw day count relative to 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the day count does not map to
    /// a representable date.
    pub fn from_days(days: i64) -> Result<Self, CalendarError> {
        i32::try_from(days)
            .ok()
            .and_then(|d| d.checked_add(UNIX_EPOCH_DAYS_FROM_CE))
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Self::from_naive)
            .ok_or(CalendarError::OutOfRange { key: days })
    }

    /// Returns the key of the current UTC calendar day.
    pub fn today() -> Self {
        Self::from_naive(Utc::now().date_naive())
    }

    /// Returns the raw day count relative to 1970-01-01.
    pub fn get(self) -> i32 {
        self.0
    }

    /// Returns the chrono date for this key.
    pub fn naive(self) -> NaiveDate {
        // DayKey is only ever built from a valid NaiveDate.
        NaiveDate::from_num_days_from_ce_opt(self.0 + UNIX_EPOCH_DAYS_FROM_CE)
            .expect("DayKey always lies within chrono's date range")
    }

    /// Returns the calendar date for this key.
    pub fn date(self) -> CalendarDate {
        CalendarDate::from_naive(self.naive())
    }

    /// Returns the key `days` days away, or `None` past the calendar range.
    pub fn checked_add_days(self, days: i32) -> Option<Self> {
        self.0
            .checked_add(days)
            .and_then(|d| Self::from_days(i64::from(d)).ok())
    }

    /// Returns the following day, or `None` at the end of the calendar range.
    pub fn succ(self) -> Option<Self> {
        self.checked_add_days(1)
    }

    /// Returns the preceding day, or `None` at the start of the calendar range.
    pub fn pred(self) -> Option<Self> {
        self.checked_add_days(-1)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.naive().weekday()
    }

    /// Returns the ISO-8601 week this day falls in.
    pub fn iso_week(self) -> IsoWeek {
        self.date().iso_week()
    }
}

impl From<CalendarDate> for DayKey {
    fn from(date: CalendarDate) -> Self {
        Self::from_date(date)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.date(), f)
    }
}
