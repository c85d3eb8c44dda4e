//! Start-of-week handling for day-grid layout.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::CalendarError;
use crate::month::YearMonth;

/// The weekday shown in the first column of a day grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WeekStart {
    /// Weeks run Sunday..Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday..Sunday.
    Monday,
}

impl WeekStart {
    /// Returns the first weekday of the week.
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Returns the column (0..=6) of `day` when weeks begin on `self`.
    pub fn column_of(self, day: Weekday) -> u8 {
        let n = match self {
            Self::Sunday => day.num_days_from_sunday(),
            Self::Monday => day.num_days_from_monday(),
        };
        n as u8
    }

    /// Returns the number of leading cells before the 1st of `month`.
    ///
    /// This is the weekday of the first of the month rotated so that the
    /// configured start of week maps to 0.
    pub fn leading_offset(self, month: YearMonth) -> u8 {
        self.column_of(month.first_day().weekday())
    }

    /// Returns the seven weekdays in column order.
    pub fn weekdays(self) -> [Weekday; 7] {
        let mut days = [self.weekday(); 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }
}

impl FromStr for WeekStart {
    type Err = CalendarError;

    /// Accepts `sunday`/`monday` (any case, three-letter forms too) and the
    /// numeric forms `0` (Sunday) and `1` (Monday).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" | "0" => Ok(Self::Sunday),
            "monday" | "mon" | "1" => Ok(Self::Monday),
            _ => Err(CalendarError::InvalidWeekStart {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunday => f.write_str("sunday"),
            Self::Monday => f.write_str("monday"),
        }
    }
}
