//! Outbound contract with the host's filtering layer.

use almanac_calendar::CalendarDate;

use crate::request::{ApplyMode, FilterOperator, FilterRequest};
use crate::target::FilterTarget;

/// The host side of filter emission.
///
/// Calls arrive synchronously on the thread that handled the interaction.
pub trait FilterHost {
    /// Restricts `target` to `values`, merging with or replacing any filter
    /// already on it.
    fn apply_filter(
        &mut self,
        target: &FilterTarget,
        operator: FilterOperator,
        values: &[CalendarDate],
        mode: ApplyMode,
    );

    /// Removes any filter on `target`.
    fn remove_filter(&mut self, target: &FilterTarget);

    /// Dispatches a prepared request to the matching method.
    fn submit(&mut self, request: &FilterRequest) {
        match request {
            FilterRequest::Apply {
                target,
                operator,
                values,
                mode,
            } => self.apply_filter(target, *operator, values, *mode),
            FilterRequest::Remove { target } => self.remove_filter(target),
        }
    }
}

impl<H: FilterHost + ?Sized> FilterHost for &mut H {
    fn apply_filter(
        &mut self,
        target: &FilterTarget,
        operator: FilterOperator,
        values: &[CalendarDate],
        mode: ApplyMode,
    ) {
        (**self).apply_filter(target, operator, values, mode);
    }

    fn remove_filter(&mut self, target: &FilterTarget) {
        (**self).remove_filter(target);
    }
}

/// Collects requests for hosts that drain and serialize them in batches.
impl FilterHost for Vec<FilterRequest> {
    fn apply_filter(
        &mut self,
        target: &FilterTarget,
        operator: FilterOperator,
        values: &[CalendarDate],
        mode: ApplyMode,
    ) {
        self.push(FilterRequest::Apply {
            target: target.clone(),
            operator,
            values: values.to_vec(),
            mode,
        });
    }

    fn remove_filter(&mut self, target: &FilterTarget) {
        self.push(FilterRequest::Remove {
            target: target.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_host_records_in_order() {
        let target = FilterTarget::new("Sales", "OrderDate");
        let mut host: Vec<FilterRequest> = Vec::new();
        host.apply_filter(
            &target,
            FilterOperator::In,
            &[CalendarDate::new(2024, 3, 1).unwrap()],
            ApplyMode::Replace,
        );
        host.remove_filter(&target);
        assert_eq!(host.len(), 2);
        assert!(!host[0].is_remove());
        assert!(host[1].is_remove());
    }

    #[test]
    fn submit_dispatches() {
        let target = FilterTarget::new("Sales", "OrderDate");
        let request = FilterRequest::Remove {
            target: target.clone(),
        };
        let mut host: Vec<FilterRequest> = Vec::new();
        (&mut host).submit(&request);
        assert_eq!(host, vec![request]);
    }
}
