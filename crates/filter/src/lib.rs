//! # almanac-filter
//!
//! Translation of date selections into declarative host filter requests.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["queryName"] -->|"FilterTarget::parse()"| B["FilterTarget"]
//!     C["SelectionEvent"] -->|"FilterEmitter::request_for()"| D["FilterRequest"]
//!     B --> D
//!     D -->|"FilterHost::submit()"| E["host"]
//! ```
//!
//! A non-empty `Changed` event becomes an `In` filter over the selected
//! dates, merged into the existing filter when the change was additive and
//! replacing it otherwise. `Cleared`, or a change that leaves nothing
//! selected, becomes a removal.
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use almanac_calendar::DayKey;
//! use almanac_filter::{ApplyMode, FilterEmitter, FilterRequest};
//! use almanac_selection::{SelectionChanged, SelectionEvent};
//!
//! let mut emitter = FilterEmitter::new();
//! emitter.retarget(Some("Sales.OrderDate")).unwrap();
//!
//! let day = DayKey::from_ymd(2024, 3, 1).unwrap();
//! let event = SelectionEvent::Changed(SelectionChanged::new(BTreeSet::from([day]), false));
//!
//! let mut host: Vec<FilterRequest> = Vec::new();
//! emitter.emit(&event, &mut host);
//! emitter.emit(&SelectionEvent::Cleared, &mut host);
//!
//! assert!(matches!(host[0], FilterRequest::Apply { mode: ApplyMode::Replace, .. }));
//! assert!(host[1].is_remove());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `target` | `FilterTarget` and qualified-name parsing |
//! | `request` | `FilterRequest`, operator and apply mode |
//! | `host` | `FilterHost` outbound contract |
//! | `emitter` | `FilterEmitter` |
//! | `error` | Error types |

mod emitter;
mod error;
mod host;
mod request;
mod target;

pub use emitter::FilterEmitter;
pub use error::FilterError;
pub use host::FilterHost;
pub use request::{ApplyMode, FilterOperator, FilterRequest};
pub use target::FilterTarget;
