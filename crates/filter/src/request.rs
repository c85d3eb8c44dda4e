//! Declarative filter requests sent to the host.

use almanac_calendar::CalendarDate;
use serde::Serialize;

use crate::target::FilterTarget;

/// Comparison applied by a filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FilterOperator {
    /// The column value is one of the listed values.
    #[default]
    In,
}

/// How a new filter combines with the one already applied to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
    /// Merge into the existing filter.
    Merge,
    /// Replace the existing filter.
    Replace,
}

impl ApplyMode {
    /// Maps the `additive` flag of a selection change to a mode.
    pub fn from_additive(additive: bool) -> Self {
        if additive { Self::Merge } else { Self::Replace }
    }
}

/// A request to the host's filtering layer.
///
/// Serializes as a tagged object with dates in ISO form:
///
/// ```
/// use almanac_calendar::CalendarDate;
/// use almanac_filter::{ApplyMode, FilterOperator, FilterRequest, FilterTarget};
///
/// let request = FilterRequest::Apply {
///     target: FilterTarget::new("Sales", "OrderDate"),
///     operator: FilterOperator::In,
///     values: vec![CalendarDate::new(2024, 3, 1).unwrap()],
///     mode: ApplyMode::Replace,
/// };
/// let json = serde_json::to_string(&request).unwrap();
/// assert!(json.contains(r#""values":["2024-03-01"]"#));
/// assert!(json.contains(r#""mode":"replace""#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FilterRequest {
    /// Restrict `target` to the listed dates.
    Apply {
        /// Column to filter.
        target: FilterTarget,
        /// Comparison to apply.
        operator: FilterOperator,
        /// Dates to keep, ascending and free of duplicates.
        values: Vec<CalendarDate>,
        /// Combination with the existing filter.
        mode: ApplyMode,
    },
    /// Drop any filter on `target`.
    Remove {
        /// Column whose filter is removed.
        target: FilterTarget,
    },
}

impl FilterRequest {
    /// Returns the column the request applies to.
    pub fn target(&self) -> &FilterTarget {
        match self {
            Self::Apply { target, .. } | Self::Remove { target } => target,
        }
    }

    /// Returns `true` for a removal.
    pub fn is_remove(&self) -> bool {
        matches!(self, Self::Remove { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> FilterTarget {
        FilterTarget::new("Sales", "OrderDate")
    }

    #[test]
    fn mode_from_additive() {
        assert_eq!(ApplyMode::from_additive(true), ApplyMode::Merge);
        assert_eq!(ApplyMode::from_additive(false), ApplyMode::Replace);
    }

    #[test]
    fn target_accessor() {
        let remove = FilterRequest::Remove { target: target() };
        assert_eq!(remove.target(), &target());
        assert!(remove.is_remove());
    }

    #[test]
    fn serialize_apply() {
        let request = FilterRequest::Apply {
            target: target(),
            operator: FilterOperator::In,
            values: vec![
                CalendarDate::new(2024, 2, 29).unwrap(),
                CalendarDate::new(2024, 3, 1).unwrap(),
            ],
            mode: ApplyMode::Merge,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "apply",
                "target": { "table": "Sales", "column": "OrderDate" },
                "operator": "In",
                "values": ["2024-02-29", "2024-03-01"],
                "mode": "merge",
            })
        );
    }

    #[test]
    fn serialize_remove() {
        let value = serde_json::to_value(FilterRequest::Remove { target: target() }).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "remove",
                "target": { "table": "Sales", "column": "OrderDate" },
            })
        );
    }
}
