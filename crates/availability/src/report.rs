//! Outcome counters of an availability rebuild.

/// Row accounting for one [`rebuild`](crate::AvailabilityIndex::rebuild).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildReport {
    pub(crate) rows: usize,
    pub(crate) ingested: usize,
    pub(crate) duplicates: usize,
    pub(crate) nulls: usize,
    pub(crate) invalid: usize,
    pub(crate) out_of_window: usize,
}

impl RebuildReport {
    /// Returns the number of rows seen.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of distinct days now available.
    pub fn ingested(&self) -> usize {
        self.ingested
    }

    /// Returns the number of rows whose day was already present.
    ///
    /// The identity of the later row replaced the earlier one.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Returns the number of null rows skipped.
    pub fn nulls(&self) -> usize {
        self.nulls
    }

    /// Returns the number of rows skipped because they did not parse as a date.
    pub fn invalid(&self) -> usize {
        self.invalid
    }

    /// Returns the number of rows skipped for falling outside the window.
    pub fn out_of_window(&self) -> usize {
        self.out_of_window
    }

    /// Returns the total number of rows that did not contribute a day.
    pub fn skipped(&self) -> usize {
        self.nulls + self.invalid + self.out_of_window
    }
}
