//! Pure conversion functions: host configuration -> component configs.
//!
//! Nothing here fails. A value that cannot be used is logged and replaced by
//! its default so a bad property never takes the widget down.

use almanac_availability::DateWindow;
use almanac_calendar::{DateInput, DayKey, WeekStart};
use almanac_selection::SelectionConfig;
use tracing::warn;

use crate::config::CalendarToml;

/// Options the widget itself acts on.
///
/// Week numbers and neighbouring-month fading live in [`SelectionConfig`]
/// because the day grid computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSettings {
    /// Show the weekday header row. Read by renderers only.
    pub show_dow_header: bool,
    /// Reconcile the selection on data updates instead of clearing it.
    pub sticky_selection: bool,
    /// Clamp navigation to the months that hold data.
    pub respect_data_range: bool,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        build_widget_settings(&CalendarToml::default())
    }
}

/// Parses a start-of-week name, falling back to Sunday.
pub fn parse_week_start(s: &str) -> WeekStart {
    s.parse().unwrap_or_else(|e| {
        warn!(error = %e, "using default start of week");
        WeekStart::default()
    })
}

/// Parses an optional date bound. Unparseable values are dropped.
pub fn parse_date_bound(field: &str, value: Option<&str>) -> Option<DayKey> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    match DateInput::from(value).to_day_key() {
        Ok(key) => Some(key),
        Err(e) => {
            warn!(field, error = %e, "ignoring date bound");
            None
        }
    }
}

/// Builds a [`SelectionConfig`] from the host configuration.
pub fn build_selection_config(config: &CalendarToml) -> SelectionConfig {
    SelectionConfig::new()
        .with_multi_select(config.multi_select_enabled)
        .with_range_select(config.range_select_enabled)
        .with_week_start(parse_week_start(&config.start_of_week))
        .with_week_numbers(config.show_week_numbers)
        .with_other_month_fade(config.other_month_fade)
}

/// Builds the availability [`DateWindow`] from `minDate`/`maxDate`.
///
/// A reversed pair is discarded as a whole.
pub fn build_date_window(config: &CalendarToml) -> DateWindow {
    let min = parse_date_bound("minDate", config.min_date.as_deref());
    let max = parse_date_bound("maxDate", config.max_date.as_deref());
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => {
            warn!(min = %lo, max = %hi, "minDate is after maxDate, ignoring both");
            DateWindow::unbounded()
        }
        _ => DateWindow::new(min, max),
    }
}

/// Builds [`WidgetSettings`] from the host configuration.
pub fn build_widget_settings(config: &CalendarToml) -> WidgetSettings {
    WidgetSettings {
        show_dow_header: config.show_dow_header,
        sticky_selection: config.sticky_selection,
        respect_data_range: config.respect_data_range,
    }
}
