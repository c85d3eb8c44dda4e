//! Conversion of heterogeneous date-like inputs into [`DayKey`]s.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::key::DayKey;

/// Naive date-time layouts tried by the generic text parse.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts tried by the generic text parse, after the date-times.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

/// A date-like value as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// A point in time that already carries UTC fields.
    Utc(DateTime<Utc>),
    /// A point in time with a fixed offset; normalized to UTC before use.
    Zoned(DateTime<FixedOffset>),
    /// Wall-clock date-time without a zone; its calendar fields are used as-is.
    Local(NaiveDateTime),
    /// A plain calendar date.
    Date(NaiveDate),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Text: strict ISO `YYYY-MM-DD`, or anything the generic parse accepts.
    Text(String),
}

impl DateInput {
    /// Converts this input into its canonical day key.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the input does not denote a
    /// calendar day.
    pub fn to_day_key(&self) -> Result<DayKey, CalendarError> {
        to_day_key(self)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Utc(value)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Zoned(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::Local(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::EpochMillis(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Converts a date-like input into its canonical day key.
///
/// Time-of-day is discarded. Zoned values are moved to UTC first, so two
/// representations of the same instant always agree. A string with the
/// strict `YYYY-MM-DD` shape must be a real calendar date; it never falls
/// through to the generic parse.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if no accepted interpretation of
/// the input yields a calendar date.
///
/// # Example
///
/// ```
/// use almanac_calendar::{DateInput, to_day_key};
///
/// let a = to_day_key(&DateInput::from("2024-03-01")).unwrap();
/// let b = to_day_key(&DateInput::from("2024-03-01T18:45:00Z")).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn to_day_key(input: &DateInput) -> Result<DayKey, CalendarError> {
    match input {
        DateInput::Utc(dt) => Ok(DayKey::from_naive(dt.date_naive())),
        DateInput::Zoned(dt) => Ok(DayKey::from_naive(dt.with_timezone(&Utc).date_naive())),
        DateInput::Local(dt) => Ok(DayKey::from_naive(dt.date())),
        DateInput::Date(d) => Ok(DayKey::from_naive(*d)),
        DateInput::EpochMillis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
            .map(|dt| DayKey::from_naive(dt.date_naive()))
            .ok_or_else(|| CalendarError::InvalidDate {
                input: ms.to_string(),
            }),
        DateInput::Text(text) => parse_text(text).map(DayKey::from_naive),
    }
}

/// Converts a day key back into its calendar date.
pub fn from_day_key(key: DayKey) -> CalendarDate {
    key.date()
}

fn parse_text(text: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidDate {
        input: text.to_string(),
    };
    if has_iso_date_shape(text) {
        return NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| invalid());
    }
    parse_generic(text.trim()).ok_or_else(invalid)
}

/// Exactly `DDDD-DD-DD`, nothing before or after.
fn has_iso_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn parse_generic(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}
