//! Table/column pair a selection filters on.

use std::fmt;

use serde::Serialize;

use crate::error::FilterError;

/// The table and column of the bound date field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FilterTarget {
    /// Table (entity) name.
    pub table: String,
    /// Column name within the table.
    pub column: String,
}

impl FilterTarget {
    /// Creates a target from its parts.
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Splits a qualified name such as `"Sales.OrderDate"` at its last `.`.
    ///
    /// Everything before the separator is the table, so table names may
    /// themselves contain dots.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnresolvedTarget`] if there is no `.` or either
    /// side of it is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use almanac_filter::FilterTarget;
    ///
    /// let t = FilterTarget::parse("db.Sales.OrderDate").unwrap();
    /// assert_eq!(t.table, "db.Sales");
    /// assert_eq!(t.column, "OrderDate");
    /// assert!(FilterTarget::parse("OrderDate").is_err());
    /// ```
    pub fn parse(query_name: &str) -> Result<Self, FilterError> {
        match query_name.rsplit_once('.') {
            Some((table, column)) if !table.is_empty() && !column.is_empty() => {
                Ok(Self::new(table, column))
            }
            _ => Err(FilterError::UnresolvedTarget {
                query_name: query_name.to_string(),
            }),
        }
    }
}

impl fmt::Display for FilterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}
