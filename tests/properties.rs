//! The host's view of the filter always matches the widget's selection.

use almanac::calendar::{CalendarDate, DateInput, DayKey};
use almanac::filter::FilterRequest;
use almanac::selection::ClickModifiers;
use almanac::{CalendarToml, CalendarWidget, DataUpdate};
use proptest::prelude::*;

fn day(offset: i32) -> DayKey {
    DayKey::from_ymd(2024, 1, 1)
        .unwrap()
        .checked_add_days(offset)
        .unwrap()
}

fn update(days: &[i32]) -> DataUpdate<i32> {
    let mut u = DataUpdate::new("Sales.OrderDate");
    for &d in days {
        u.push(Some(DateInput::Date(day(d).naive())), d);
    }
    u
}

proptest! {
    #[test]
    fn last_request_mirrors_selection(
        days in proptest::collection::vec(0i32..45, 1..30),
        clicks in proptest::collection::vec((0i32..45, any::<bool>(), any::<bool>()), 1..25),
        sticky in any::<bool>(),
    ) {
        let config = CalendarToml {
            sticky_selection: sticky,
            ..CalendarToml::default()
        };
        let mut widget: CalendarWidget<i32, Vec<FilterRequest>> =
            CalendarWidget::with_today(&config, Vec::new(), day(0));
        widget.on_data_update(update(&days));

        for (d, ctrl, shift) in clicks {
            let sent_before = widget.host().len();
            let event = widget.on_day_click(day(d), ClickModifiers { ctrl, shift });
            prop_assert_eq!(event.is_some(), widget.host().len() == sent_before + 1);

            let Some(last) = widget.host().last() else { continue };
            let selected: Vec<CalendarDate> =
                widget.engine().selected().iter().map(|k| k.date()).collect();
            match last {
                FilterRequest::Apply { values, .. } => {
                    prop_assert!(!values.is_empty());
                    prop_assert_eq!(values, &selected);
                }
                FilterRequest::Remove { .. } => prop_assert!(selected.is_empty()),
            }
        }

        widget.on_data_update(update(&days[..days.len() / 2]));
        for key in widget.engine().selected() {
            prop_assert!(widget.availability().contains(*key));
        }
    }
}
