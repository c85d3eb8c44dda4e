//! Walking whole days between two keys.

use crate::key::DayKey;

/// Returns every day from `start` to `end`, both inclusive, in order.
///
/// Yields nothing when `start > end`.
///
/// # Example
///
/// ```
/// use almanac_calendar::{DayKey, day_range};
///
/// let a = DayKey::from_ymd(2023, 12, 30).unwrap();
/// let b = DayKey::from_ymd(2024, 1, 2).unwrap();
/// assert_eq!(day_range(a, b).count(), 4);
/// ```
pub fn day_range(start: DayKey, end: DayKey) -> impl DoubleEndedIterator<Item = DayKey> {
    // Every integer between two valid keys is itself a valid key.
    (start.get()..=end.get()).filter_map(|d| DayKey::from_days(i64::from(d)).ok())
}
