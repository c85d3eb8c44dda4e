//! Single, multi and range date selection.
//!
//! [`SelectionEngine`] is the state machine behind a calendar filter widget.
//! It reads an [`AvailabilityIndex`] to decide which days may be selected,
//! owns the selection, the range anchor and the view cursor, and reports
//! every selection change as a [`SelectionEvent`].
//!
//! # Quick start
//!
//! ```
//! use almanac_availability::AvailabilityIndex;
//! use almanac_calendar::{DateInput, DayKey};
//! use almanac_selection::{ClickModifiers, SelectionConfig, SelectionEngine, SelectionEvent};
//!
//! let mut availability = AvailabilityIndex::new();
//! availability.rebuild(
//!     ["2024-03-01", "2024-03-05", "2024-03-08"]
//!         .into_iter()
//!         .map(|d| (Some(DateInput::from(d)), d)),
//! );
//!
//! let today = DayKey::from_ymd(2024, 3, 15).unwrap();
//! let mut engine = SelectionEngine::with_today(SelectionConfig::new(), today);
//!
//! let first = DayKey::from_ymd(2024, 3, 1).unwrap();
//! let last = DayKey::from_ymd(2024, 3, 8).unwrap();
//! engine.click(first, ClickModifiers::NONE, &availability);
//! let event = engine.click(last, ClickModifiers::SHIFT, &availability).unwrap();
//!
//! let SelectionEvent::Changed(changed) = event else { unreachable!() };
//! assert!(changed.additive());
//! assert_eq!(changed.keys().len(), 3);
//! ```
//!
//! # Architecture
//!
//! ```text
//! SelectionEngine
//!   ├─ click()            single / multi / range  -> SelectionEvent
//!   ├─ clear()                                    -> SelectionEvent::Cleared
//!   ├─ reconcile()        after availability rebuild
//!   ├─ shift_month() / shift_year() / step()      cursor only
//!   ├─ click_title() / drill_into_*()             view mode
//!   └─ month_grid() / month_picker() / year_picker()   (grid.rs)
//! ```
//!
//! [`AvailabilityIndex`]: almanac_availability::AvailabilityIndex

pub mod config;
pub mod engine;
pub mod event;
pub mod grid;
pub mod view;

pub use config::SelectionConfig;
pub use engine::{SelectionEngine, YEAR_PAGE_STEP};
pub use event::{ClickModifiers, SelectionChanged, SelectionEvent, SelectionKind};
pub use grid::{DayCell, GRID_ROWS, MonthCell, MonthGrid, MonthPicker, WeekRow, YEARS_PER_PAGE, YearCell, YearPicker};
pub use view::ViewMode;
