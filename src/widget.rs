//! One embeddable calendar instance.

use almanac_availability::{AvailabilityIndex, RebuildReport};
use almanac_calendar::{CalendarError, DateInput, DayKey, YearMonth};
use almanac_filter::{FilterEmitter, FilterHost, FilterTarget};
use almanac_selection::{
    ClickModifiers, MonthGrid, MonthPicker, SelectionChanged, SelectionEngine, SelectionEvent,
    ViewMode, YearPicker,
};
use tracing::{debug, warn};

use crate::config::CalendarToml;
use crate::convert::{
    WidgetSettings, build_date_window, build_selection_config, build_widget_settings,
};

/// A dataset delivered by the host.
///
/// `category_values` and `source_identities` are parallel: the identity at
/// position `n` belongs to the value at position `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUpdate<I> {
    /// Raw values of the bound date column. `None` is a null cell.
    pub category_values: Vec<Option<DateInput>>,
    /// Opaque row identities, passed back to the host untouched.
    pub source_identities: Vec<I>,
    /// Qualified name of the bound column, `"table.column"`.
    pub query_name: Option<String>,
}

impl<I> Default for DataUpdate<I> {
    fn default() -> Self {
        Self {
            category_values: Vec::new(),
            source_identities: Vec::new(),
            query_name: None,
        }
    }
}

impl<I> DataUpdate<I> {
    /// Creates an empty update bound to `query_name`.
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: Some(query_name.into()),
            ..Self::default()
        }
    }

    /// Appends one row.
    pub fn with_row(mut self, value: impl Into<DateInput>, identity: I) -> Self {
        self.push(Some(value.into()), identity);
        self
    }

    /// Appends one row with a null value.
    pub fn with_null(mut self, identity: I) -> Self {
        self.push(None, identity);
        self
    }

    /// Appends one row in place.
    pub fn push(&mut self, value: Option<DateInput>, identity: I) {
        self.category_values.push(value);
        self.source_identities.push(identity);
    }
}

/// A calendar filter widget: availability, selection and filter emission
/// wired to one host.
///
/// Every handler runs to completion, including the call into the host,
/// before it returns.
#[derive(Debug)]
pub struct CalendarWidget<I, H: FilterHost> {
    engine: SelectionEngine,
    availability: AvailabilityIndex<I>,
    emitter: FilterEmitter,
    settings: WidgetSettings,
    host: H,
}

impl<I, H: FilterHost> CalendarWidget<I, H> {
    /// Creates a widget with no data, showing the current month.
    pub fn new(config: &CalendarToml, host: H) -> Self {
        Self::with_today(config, host, DayKey::today())
    }

    /// Creates a widget that treats `today` as the current day.
    pub fn with_today(config: &CalendarToml, host: H, today: DayKey) -> Self {
        Self {
            engine: SelectionEngine::with_today(build_selection_config(config), today),
            availability: AvailabilityIndex::with_window(build_date_window(config)),
            emitter: FilterEmitter::new(),
            settings: build_widget_settings(config),
            host,
        }
    }

    /// Replaces the dataset.
    ///
    /// Re-derives the filter target, rebuilds availability, then either
    /// drops stale selected days or, without sticky selection, clears the
    /// selection. Any resulting event is forwarded to the host.
    ///
    /// When the bound column changes, the filter on the old target is
    /// removed and a kept selection is re-applied to the new one.
    pub fn on_data_update(&mut self, update: DataUpdate<I>) -> RebuildReport {
        let previous = self.emitter.target().cloned();
        // An unresolved target is logged by the emitter and only disables emission.
        self.emitter.retarget(update.query_name.as_deref()).ok();
        let retargeted = previous.as_ref() != self.emitter.target();
        if let Some(old) = previous.as_ref().filter(|_| retargeted) {
            debug!(filter_target = %old, "bound column changed, removing old filter");
            self.host.remove_filter(old);
        }

        let DataUpdate {
            category_values,
            source_identities,
            ..
        } = update;
        if category_values.len() != source_identities.len() {
            warn!(
                values = category_values.len(),
                identities = source_identities.len(),
                "value and identity counts differ, extra rows ignored"
            );
        }
        let report = self
            .availability
            .rebuild(category_values.into_iter().zip(source_identities));

        let cleared = if !self.settings.sticky_selection && !self.engine.selected().is_empty() {
            Some(self.engine.clear())
        } else {
            None
        };
        let reconciled = self.engine.reconcile(&self.availability);
        self.update_navigation_bounds();

        let reapplied = (retargeted && !self.engine.selected().is_empty()).then(|| {
            SelectionEvent::Changed(SelectionChanged::new(self.engine.selected().clone(), false))
        });
        if let Some(event) = cleared.or(reconciled).or(reapplied) {
            self.forward(&event);
        }
        report
    }

    /// Handles a click on a day cell.
    pub fn on_day_click(&mut self, key: DayKey, modifiers: ClickModifiers) -> Option<SelectionEvent> {
        let event = self.engine.click(key, modifiers, &self.availability)?;
        self.forward(&event);
        Some(event)
    }

    /// Handles the clear control.
    pub fn on_clear(&mut self) -> SelectionEvent {
        let event = self.engine.clear();
        self.forward(&event);
        event
    }

    /// Re-seeds the selection from host-persisted keys.
    pub fn restore<K>(&mut self, keys: K) -> Option<SelectionEvent>
    where
        K: IntoIterator<Item = DayKey>,
    {
        let event = self.engine.restore(keys, &self.availability)?;
        self.forward(&event);
        Some(event)
    }

    /// Applies a new configuration snapshot.
    ///
    /// A changed `minDate`/`maxDate` takes effect at the next data update.
    pub fn apply_settings(&mut self, config: &CalendarToml) {
        self.settings = build_widget_settings(config);
        self.engine.set_config(build_selection_config(config));
        self.availability.set_window(build_date_window(config));
        self.update_navigation_bounds();
        debug!(settings = ?self.settings, "settings applied");
    }

    /// Prev/next control in the current view mode.
    pub fn step(&mut self, delta: i32) -> YearMonth {
        self.engine.step(delta)
    }

    /// Moves the cursor by `delta` months.
    pub fn shift_month(&mut self, delta: i32) -> YearMonth {
        self.engine.shift_month(delta)
    }

    /// Moves the cursor by `delta` years.
    pub fn shift_year(&mut self, delta: i32) -> YearMonth {
        self.engine.shift_year(delta)
    }

    /// Shows the month containing `key`.
    pub fn go_to(&mut self, key: DayKey) -> YearMonth {
        self.engine.go_to(key)
    }

    /// Shows the current month.
    pub fn go_to_today(&mut self) -> YearMonth {
        self.engine.go_to_today()
    }

    /// Title click.
    pub fn click_title(&mut self) -> ViewMode {
        self.engine.click_title()
    }

    /// Year cell click.
    pub fn drill_into_year(&mut self, year: i32) -> Result<ViewMode, CalendarError> {
        self.engine.drill_into_year(year)
    }

    /// Month cell click.
    pub fn drill_into_month(&mut self, month: u8) -> Result<ViewMode, CalendarError> {
        self.engine.drill_into_month(month)
    }

    /// Day grid of the cursor month.
    pub fn month_grid(&self) -> MonthGrid {
        self.engine.month_grid(&self.availability)
    }

    /// Month cells of the cursor year.
    pub fn month_picker(&self) -> MonthPicker {
        self.engine.month_picker(&self.availability)
    }

    /// Year page around the cursor year.
    pub fn year_picker(&self) -> YearPicker {
        self.engine.year_picker(&self.availability)
    }

    /// Source identities of the selected days, ascending by day.
    pub fn selected_identities(&self) -> Vec<(DayKey, &I)> {
        self.availability
            .identities_for(self.engine.selected().iter().copied())
    }

    /// Returns the selection engine.
    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    /// Returns the availability index.
    pub fn availability(&self) -> &AvailabilityIndex<I> {
        &self.availability
    }

    /// Returns the validated widget settings.
    pub fn settings(&self) -> WidgetSettings {
        self.settings
    }

    /// Returns the current filter target, if resolved.
    pub fn filter_target(&self) -> Option<&FilterTarget> {
        self.emitter.target()
    }

    /// Returns the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the widget and returns the host.
    pub fn into_host(self) -> H {
        self.host
    }

    fn forward(&mut self, event: &SelectionEvent) {
        self.emitter.emit(event, &mut self.host);
    }

    fn update_navigation_bounds(&mut self) {
        let bounds = if self.settings.respect_data_range {
            self.availability.bounds()
        } else {
            None
        };
        self.engine.set_navigation_bounds(bounds);
    }
}
