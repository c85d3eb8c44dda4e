//! Configuration for the selection engine.

use almanac_calendar::WeekStart;

/// Behaviour switches for [`SelectionEngine`](crate::SelectionEngine).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use almanac_calendar::WeekStart;
/// use almanac_selection::SelectionConfig;
///
/// let config = SelectionConfig::new()
///     .with_multi_select(false)
///     .with_week_start(WeekStart::Monday);
///
/// assert!(!config.multi_select());
/// assert!(config.range_select());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Ctrl-click toggles days in and out of the selection.
    multi_select: bool,
    /// Shift-click adds the span from the last clicked day.
    range_select: bool,
    /// First column of the day grid.
    week_start: WeekStart,
    /// Day grid rows carry their ISO week number.
    week_numbers: bool,
    /// Day cells of neighbouring months are marked faded.
    other_month_fade: bool,
}

impl SelectionConfig {
    /// Creates a configuration with multi and range selection enabled,
    /// Sunday-start weeks, no week numbers and faded neighbouring days.
    pub fn new() -> Self {
        Self {
            multi_select: true,
            range_select: true,
            week_start: WeekStart::Sunday,
            week_numbers: false,
            other_month_fade: true,
        }
    }

    /// Enables or disables ctrl-click toggling.
    pub fn with_multi_select(mut self, enabled: bool) -> Self {
        self.multi_select = enabled;
        self
    }

    /// Enables or disables shift-click ranges.
    pub fn with_range_select(mut self, enabled: bool) -> Self {
        self.range_select = enabled;
        self
    }

    /// Sets the first weekday of the grid.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Enables or disables the ISO week number of each grid row.
    pub fn with_week_numbers(mut self, enabled: bool) -> Self {
        self.week_numbers = enabled;
        self
    }

    /// Enables or disables fading of days outside the cursor month.
    pub fn with_other_month_fade(mut self, enabled: bool) -> Self {
        self.other_month_fade = enabled;
        self
    }

    /// Returns whether ctrl-click toggling is enabled.
    pub fn multi_select(&self) -> bool {
        self.multi_select
    }

    /// Returns whether shift-click ranges are enabled.
    pub fn range_select(&self) -> bool {
        self.range_select
    }

    /// Returns the first weekday of the grid.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns whether grid rows carry week numbers.
    pub fn week_numbers(&self) -> bool {
        self.week_numbers
    }

    /// Returns whether days outside the cursor month are faded.
    pub fn other_month_fade(&self) -> bool {
        self.other_month_fade
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SelectionConfig::default();
        assert!(config.multi_select());
        assert!(config.range_select());
        assert_eq!(config.week_start(), WeekStart::Sunday);
        assert!(!config.week_numbers());
        assert!(config.other_month_fade());
    }

    #[test]
    fn builder_chain() {
        let config = SelectionConfig::new()
            .with_multi_select(false)
            .with_range_select(false)
            .with_week_start(WeekStart::Monday)
            .with_week_numbers(true)
            .with_other_month_fade(false);
        assert!(!config.multi_select());
        assert!(!config.range_select());
        assert_eq!(config.week_start(), WeekStart::Monday);
        assert!(config.week_numbers());
        assert!(!config.other_month_fade());
    }
}
