//! Index of selectable days.
//!
//! An [`AvailabilityIndex`] holds the set of [`DayKey`]s backed by bound
//! source data, together with the extremes of that set and one opaque
//! identity token per key. It is rebuilt wholesale on every dataset update
//! and tolerates bad rows: nulls and unparseable values are skipped and
//! counted in a [`RebuildReport`], never raised.
//!
//! # Quick start
//!
//! ```
//! use almanac_availability::AvailabilityIndex;
//! use almanac_calendar::{DateInput, DayKey};
//!
//! let rows = vec![
//!     (Some(DateInput::from("2024-03-05")), "row-2"),
//!     (Some(DateInput::from("2024-03-01")), "row-1"),
//!     (None, "row-null"),
//!     (Some(DateInput::from("garbage")), "row-bad"),
//! ];
//! let mut index = AvailabilityIndex::new();
//! let report = index.rebuild(rows);
//!
//! assert_eq!(report.ingested(), 2);
//! assert_eq!(report.skipped(), 2);
//! let first = DayKey::from_ymd(2024, 3, 1).unwrap();
//! assert!(index.contains(first));
//! assert_eq!(index.source_identity_of(first), Some(&"row-1"));
//! assert_eq!(index.bounds().unwrap().min, first);
//! ```
//!
//! [`DayKey`]: almanac_calendar::DayKey

mod index;
mod report;
mod window;

pub use index::{AvailabilityIndex, Bounds};
pub use report::RebuildReport;
pub use window::DateWindow;
