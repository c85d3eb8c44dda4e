//! # almanac-calendar
//!
//! Canonical day keys and Gregorian date arithmetic.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateInput"] -->|"to_day_key()"| B["DayKey"]
//!     B -->|"from_day_key()"| C["CalendarDate"]
//!     C -->|".iso_week()"| D["IsoWeek"]
//!     B -->|"YearMonth::of()"| E["YearMonth"]
//!     E -->|"WeekStart::leading_offset()"| F["grid offset"]
//!     B -->|"day_range()"| G["DayKey iterator"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{DateInput, DayKey, WeekStart, YearMonth, day_range, to_day_key};
//!
//! // Any accepted form of the same UTC day yields the same key.
//! let a = to_day_key(&DateInput::from("2024-03-01")).unwrap();
//! let b = to_day_key(&DateInput::from("2024-02-29T23:30:00-05:00")).unwrap();
//! assert_eq!(a, b);
//!
//! // Month navigation carries into the year.
//! let dec = YearMonth::new(2024, 12).unwrap();
//! assert_eq!(dec.shift_months(1), YearMonth::new(2025, 1).unwrap());
//!
//! // Grid offset of the first visible cell.
//! assert_eq!(WeekStart::Monday.leading_offset(YearMonth::of(a)), 4);
//!
//! // Whole-day walk.
//! let end = DayKey::from_ymd(2024, 3, 8).unwrap();
//! assert_eq!(day_range(a, end).count(), 8);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `key` | `DayKey` newtype (days since 1970-01-01 UTC) |
//! | `codec` | Input normalization into day keys |
//! | `date` | Validated Gregorian date, ISO week |
//! | `month` | `YearMonth` view cursor |
//! | `week` | Start-of-week configuration |
//! | `sequence` | Inclusive day walks |
//! | `error` | Error types |

mod codec;
mod date;
mod error;
mod key;
mod month;
mod sequence;
mod week;

pub use chrono::Weekday;
pub use codec::{DateInput, from_day_key, to_day_key};
pub use date::{CalendarDate, IsoWeek, days_in_month, is_leap_year};
pub use error::CalendarError;
pub use key::DayKey;
pub use month::YearMonth;
pub use sequence::day_range;
pub use week::WeekStart;
