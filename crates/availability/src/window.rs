//! Configured clamp on which days may become available.

use almanac_calendar::DayKey;

/// Optional inclusive `[min, max]` limit applied during a rebuild.
///
/// Either end may be open. Keys outside the window are skipped as if the
/// row were absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    min: Option<DayKey>,
    max: Option<DayKey>,
}

impl DateWindow {
    /// A window that admits every day.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Creates a window from optional ends.
    ///
    /// Ends given in the wrong order are swapped.
    pub fn new(min: Option<DayKey>, max: Option<DayKey>) -> Self {
        match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => Self {
                min: Some(hi),
                max: Some(lo),
            },
            _ => Self { min, max },
        }
    }

    /// Returns the lower end, if any.
    pub fn min(&self) -> Option<DayKey> {
        self.min
    }

    /// Returns the upper end, if any.
    pub fn max(&self) -> Option<DayKey> {
        self.max
    }

    /// Returns `true` if neither end is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Returns `true` if `key` lies inside the window.
    pub fn contains(&self, key: DayKey) -> bool {
        self.min.is_none_or(|lo| key >= lo) && self.max.is_none_or(|hi| key <= hi)
    }
}
