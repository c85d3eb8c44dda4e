//! # almanac
//!
//! Date-selection state machine for an embeddable calendar filter widget.
//!
//! A host feeds the widget a column of date-like values and receives
//! declarative filter requests back as the user clicks days.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DataUpdate"] -->|"to_day_key()"| B["AvailabilityIndex"]
//!     B --> C["SelectionEngine"]
//!     D["clicks"] --> C
//!     C -->|"SelectionEvent"| E["FilterEmitter"]
//!     E -->|"FilterRequest"| F["FilterHost"]
//!     G["CalendarToml"] -->|"convert"| C
//!     G -->|"convert"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac::{CalendarToml, CalendarWidget, DataUpdate};
//! use almanac::calendar::DayKey;
//! use almanac::filter::FilterRequest;
//! use almanac::selection::ClickModifiers;
//!
//! let config = CalendarToml::from_toml_str(r#"startOfWeek = "Monday""#).unwrap();
//! let mut widget: CalendarWidget<u32, Vec<FilterRequest>> =
//!     CalendarWidget::new(&config, Vec::new());
//!
//! widget.on_data_update(
//!     DataUpdate::new("Sales.OrderDate")
//!         .with_row("2024-03-01", 1)
//!         .with_row("2024-03-05", 2)
//!         .with_row("2024-03-08", 3),
//! );
//!
//! let first = DayKey::from_ymd(2024, 3, 1).unwrap();
//! let last = DayKey::from_ymd(2024, 3, 8).unwrap();
//! widget.on_day_click(first, ClickModifiers::NONE);
//! widget.on_day_click(last, ClickModifiers::SHIFT);
//! widget.on_clear();
//!
//! assert_eq!(widget.host().len(), 3);
//! assert!(widget.host()[2].is_remove());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Host configuration snapshot (TOML / JSON) |
//! | `convert` | Snapshot -> component configs |
//! | `logging` | `tracing` subscriber setup |
//! | `widget` | `CalendarWidget` and `DataUpdate` |

pub mod config;
pub mod convert;
pub mod logging;
pub mod widget;

pub use almanac_availability as availability;
pub use almanac_calendar as calendar;
pub use almanac_filter as filter;
pub use almanac_selection as selection;

pub use config::{CalendarToml, StyleToml};
pub use convert::WidgetSettings;
pub use widget::{CalendarWidget, DataUpdate};
