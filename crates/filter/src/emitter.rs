//! Turns selection events into filter requests.

use almanac_calendar::{CalendarDate, from_day_key};
use almanac_selection::SelectionEvent;
use tracing::{debug, warn};

use crate::error::FilterError;
use crate::host::FilterHost;
use crate::request::{ApplyMode, FilterOperator, FilterRequest};
use crate::target::FilterTarget;

/// Translates [`SelectionEvent`]s into requests against one filter target.
///
/// With no target every event is swallowed; the selection itself keeps
/// working on the widget side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEmitter {
    target: Option<FilterTarget>,
}

impl FilterEmitter {
    /// Creates an emitter with no target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an emitter bound to `target`.
    pub fn with_target(target: FilterTarget) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Returns the current target.
    pub fn target(&self) -> Option<&FilterTarget> {
        self.target.as_ref()
    }

    /// Re-derives the target from the bound column's qualified name.
    ///
    /// An absent or unresolvable name disables emission until the next call.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnresolvedTarget`] when `query_name` is present
    /// but cannot be split. The emitter is disabled in that case too.
    pub fn retarget(&mut self, query_name: Option<&str>) -> Result<(), FilterError> {
        self.target = None;
        let Some(query_name) = query_name else {
            debug!("no bound column, filter emission disabled");
            return Ok(());
        };
        match FilterTarget::parse(query_name) {
            Ok(target) => {
                debug!(filter_target = %target, "filter target resolved");
                self.target = Some(target);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "filter emission disabled");
                Err(e)
            }
        }
    }

    /// Builds the request for `event`, or `None` when there is no target.
    ///
    /// A cleared selection, or a change that leaves nothing selected, becomes
    /// a removal. An `In` filter with no values would exclude every row.
    pub fn request_for(&self, event: &SelectionEvent) -> Option<FilterRequest> {
        let target = self.target.clone()?;
        let request = match event {
            SelectionEvent::Changed(changed) if !changed.is_empty() => {
                let values: Vec<CalendarDate> =
                    changed.keys().iter().copied().map(from_day_key).collect();
                FilterRequest::Apply {
                    target,
                    operator: FilterOperator::In,
                    values,
                    mode: ApplyMode::from_additive(changed.additive()),
                }
            }
            SelectionEvent::Changed(_) | SelectionEvent::Cleared => {
                FilterRequest::Remove { target }
            }
        };
        Some(request)
    }

    /// Sends the request for `event` to `host`.
    ///
    /// Returns the request that was sent, or `None` if emission is disabled.
    pub fn emit<H>(&self, event: &SelectionEvent, host: &mut H) -> Option<FilterRequest>
    where
        H: FilterHost + ?Sized,
    {
        let request = self.request_for(event)?;
        match &request {
            FilterRequest::Apply { values, mode, .. } => {
                debug!(values = values.len(), ?mode, "applying filter");
            }
            FilterRequest::Remove { target } => debug!(filter_target = %target, "removing filter"),
        }
        host.submit(&request);
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use almanac_calendar::DayKey;
    use almanac_selection::SelectionChanged;

    use super::*;

    fn key(y: i32, m: u8, d: u8) -> DayKey {
        DayKey::from_ymd(y, m, d).unwrap()
    }

    fn emitter() -> FilterEmitter {
        FilterEmitter::with_target(FilterTarget::new("Sales", "OrderDate"))
    }

    fn changed(keys: &[DayKey], additive: bool) -> SelectionEvent {
        SelectionEvent::Changed(SelectionChanged::new(
            keys.iter().copied().collect::<BTreeSet<_>>(),
            additive,
        ))
    }

    #[test]
    fn single_maps_to_replace() {
        let request = emitter()
            .request_for(&changed(&[key(2024, 3, 1)], false))
            .unwrap();
        let FilterRequest::Apply { values, mode, operator, .. } = request else {
            panic!("expected apply");
        };
        assert_eq!(values, vec![CalendarDate::new(2024, 3, 1).unwrap()]);
        assert_eq!(mode, ApplyMode::Replace);
        assert_eq!(operator, FilterOperator::In);
    }

    #[test]
    fn additive_maps_to_merge() {
        let request = emitter()
            .request_for(&changed(&[key(2024, 3, 8), key(2024, 3, 1)], true))
            .unwrap();
        let FilterRequest::Apply { values, mode, .. } = request else {
            panic!("expected apply");
        };
        assert_eq!(mode, ApplyMode::Merge);
        assert_eq!(
            values,
            vec![
                CalendarDate::new(2024, 3, 1).unwrap(),
                CalendarDate::new(2024, 3, 8).unwrap(),
            ]
        );
    }

    #[test]
    fn cleared_maps_to_remove() {
        let request = emitter().request_for(&SelectionEvent::Cleared).unwrap();
        assert!(request.is_remove());
    }

    #[test]
    fn empty_change_maps_to_remove() {
        let request = emitter().request_for(&changed(&[], false)).unwrap();
        assert!(request.is_remove());
    }

    #[test]
    fn no_target_suppresses() {
        let emitter = FilterEmitter::new();
        let mut host: Vec<FilterRequest> = Vec::new();
        assert!(emitter.emit(&SelectionEvent::Cleared, &mut host).is_none());
        assert!(host.is_empty());
    }

    #[test]
    fn retarget_resolves_and_disables() {
        let mut emitter = FilterEmitter::new();
        emitter.retarget(Some("Sales.OrderDate")).unwrap();
        assert_eq!(emitter.target(), Some(&FilterTarget::new("Sales", "OrderDate")));

        let err = emitter.retarget(Some("OrderDate")).unwrap_err();
        assert!(matches!(err, FilterError::UnresolvedTarget { .. }));
        assert_eq!(emitter.target(), None);

        emitter.retarget(Some("Sales.OrderDate")).unwrap();
        emitter.retarget(None).unwrap();
        assert_eq!(emitter.target(), None);
    }

    #[test]
    fn emit_returns_sent_request() {
        let mut host: Vec<FilterRequest> = Vec::new();
        let sent = emitter()
            .emit(&changed(&[key(2024, 3, 1)], false), &mut host)
            .unwrap();
        assert_eq!(host, vec![sent]);
    }
}
