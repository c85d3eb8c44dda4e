//! Error types for the almanac-calendar crate.

/// Error type for all fallible operations in the almanac-calendar crate.
///
/// This enum covers validation failures for month and day values in the
/// proleptic Gregorian calendar, as well as inputs that cannot be turned
/// into a day key at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when an input value cannot be interpreted as a calendar date.
    #[error("invalid date: {input:?}")]
    InvalidDate {
        /// A rendering of the rejected input.
        input: String,
    },

    /// Returned when a week-start name is not recognised.
    #[error("invalid week start: {value:?} (expected \"sunday\" or \"monday\")")]
    InvalidWeekStart {
        /// The unrecognised value.
        value: String,
    },

    /// Returned when a day key lies outside the representable calendar range.
    #[error("day key {key} is outside the supported calendar range")]
    OutOfRange {
        /// The offending day key value.
        key: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 2,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 2 (max 29)");
    }

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            input: "not a date".to_string(),
        };
        assert_eq!(err.to_string(), "invalid date: \"not a date\"");
    }

    #[test]
    fn error_invalid_week_start() {
        let err = CalendarError::InvalidWeekStart {
            value: "friday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid week start: \"friday\" (expected \"sunday\" or \"monday\")"
        );
    }

    #[test]
    fn error_out_of_range() {
        let err = CalendarError::OutOfRange { key: i64::MAX };
        assert!(err.to_string().contains("outside the supported calendar range"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
