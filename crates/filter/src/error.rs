//! Error types for the almanac-filter crate.

/// Error type for all fallible operations in the almanac-filter crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// Returned when a bound column's qualified name cannot be split into a
    /// table and a column.
    #[error("cannot resolve filter target from {query_name:?} (expected \"table.column\")")]
    UnresolvedTarget {
        /// The qualified name that was provided.
        query_name: String,
    },
}
