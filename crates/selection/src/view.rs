//! Calendar view modes.

/// Granularity of the grid currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Days of one month.
    #[default]
    Day,
    /// Months of one year.
    Month,
    /// A page of years.
    Year,
}

impl ViewMode {
    /// Returns the next mode in the Day -> Month -> Year -> Day cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Day => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Day,
        }
    }
}
