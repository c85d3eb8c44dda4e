//! The date-selection state machine.

use std::collections::BTreeSet;

use almanac_availability::{AvailabilityIndex, Bounds};
use almanac_calendar::{CalendarError, DayKey, YearMonth, day_range};
use tracing::debug;

use crate::config::SelectionConfig;
use crate::event::{ClickModifiers, SelectionChanged, SelectionEvent, SelectionKind};
use crate::grid::{MonthGrid, MonthPicker, YearPicker};
use crate::view::ViewMode;

/// Years moved by one prev/next step in the year view.
pub const YEAR_PAGE_STEP: i32 = 10;

/// Selection state of one calendar widget.
///
/// Owns the selected days, the range anchor, the view cursor and the view
/// mode. Every mutation that changes the selection returns the
/// [`SelectionEvent`] the caller must forward; navigation never touches the
/// selection.
///
/// Invariant: every selected day was available when it was inserted, and
/// [`reconcile`](Self::reconcile) drops days that stop being available.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    config: SelectionConfig,
    selected: BTreeSet<DayKey>,
    last_clicked: Option<DayKey>,
    cursor: YearMonth,
    mode: ViewMode,
    today: DayKey,
    nav_bounds: Option<(YearMonth, YearMonth)>,
}

impl SelectionEngine {
    /// Creates an engine with an empty selection, the cursor on the current
    /// UTC month and the day view shown.
    pub fn new(config: SelectionConfig) -> Self {
        Self::with_today(config, DayKey::today())
    }

    /// Like [`new`](Self::new), with an explicit notion of "today".
    pub fn with_today(config: SelectionConfig, today: DayKey) -> Self {
        Self {
            config,
            selected: BTreeSet::new(),
            last_clicked: None,
            cursor: YearMonth::of(today),
            mode: ViewMode::Day,
            today,
            nav_bounds: None,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Replaces the configuration. The selection is left untouched.
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.config = config;
    }

    /// Returns the selected days.
    pub fn selected(&self) -> &BTreeSet<DayKey> {
        &self.selected
    }

    /// Returns `true` if `key` is selected.
    pub fn is_selected(&self, key: DayKey) -> bool {
        self.selected.contains(&key)
    }

    /// Returns the anchor for the next range click.
    pub fn last_clicked(&self) -> Option<DayKey> {
        self.last_clicked
    }

    /// Returns the month the day view is positioned on.
    pub fn cursor(&self) -> YearMonth {
        self.cursor
    }

    /// Returns the current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    /// Returns the day the engine treats as today.
    pub fn today(&self) -> DayKey {
        self.today
    }

    /// Updates the day the engine treats as today.
    pub fn set_today(&mut self, today: DayKey) {
        self.today = today;
    }

    /// Applies a click on `key`.
    ///
    /// Returns `None` without touching any state when `key` is not available.
    /// Otherwise runs exactly one branch:
    ///
    /// 1. range, when range selection is on, shift is held and an anchor
    ///    exists: every available day between the anchor and `key` is added;
    /// 2. multi, when multi selection is on and ctrl is held: `key` is toggled;
    /// 3. single: the selection becomes `{key}`.
    ///
    /// `key` becomes the new anchor in every branch.
    #[tracing::instrument(skip_all, fields(key = %key))]
    pub fn click<I>(
        &mut self,
        key: DayKey,
        modifiers: ClickModifiers,
        availability: &AvailabilityIndex<I>,
    ) -> Option<SelectionEvent> {
        if !availability.contains(key) {
            debug!("ignoring click on unavailable day");
            return None;
        }

        let kind = match self.last_clicked {
            Some(anchor) if self.config.range_select() && modifiers.shift => {
                let (a, b) = (anchor.min(key), anchor.max(key));
                self.selected
                    .extend(day_range(a, b).filter(|&k| availability.contains(k)));
                SelectionKind::Range
            }
            _ if self.config.multi_select() && modifiers.ctrl => {
                if !self.selected.remove(&key) {
                    self.selected.insert(key);
                }
                SelectionKind::Multi
            }
            _ => {
                self.selected.clear();
                self.selected.insert(key);
                SelectionKind::Single
            }
        };
        self.last_clicked = Some(key);

        debug!(kind = ?kind, selected = self.selected.len(), "selection updated");
        Some(self.changed(kind.is_additive()))
    }

    /// Empties the selection and forgets the range anchor.
    pub fn clear(&mut self) -> SelectionEvent {
        self.selected.clear();
        self.last_clicked = None;
        debug!("selection cleared");
        SelectionEvent::Cleared
    }

    /// Drops selected days that are no longer available.
    ///
    /// Call after every availability rebuild. Returns a non-additive
    /// `Changed` event when at least one day was dropped. A stale anchor is
    /// forgotten, and an empty availability moves the cursor back to today.
    #[tracing::instrument(skip_all, fields(available = availability.len()))]
    pub fn reconcile<I>(&mut self, availability: &AvailabilityIndex<I>) -> Option<SelectionEvent> {
        if availability.is_empty() {
            self.cursor = YearMonth::of(self.today);
        }
        if self.last_clicked.is_some_and(|k| !availability.contains(k)) {
            self.last_clicked = None;
        }

        let before = self.selected.len();
        self.selected.retain(|&k| availability.contains(k));
        let dropped = before - self.selected.len();
        if dropped == 0 {
            return None;
        }
        debug!(dropped, remaining = self.selected.len(), "dropped stale selection");
        Some(self.changed(false))
    }

    /// Replaces the selection with the available subset of `keys`.
    ///
    /// Used to re-seed the engine from state persisted by the host. Returns
    /// `None` when the resulting selection equals the current one.
    pub fn restore<I, K>(&mut self, keys: K, availability: &AvailabilityIndex<I>) -> Option<SelectionEvent>
    where
        K: IntoIterator<Item = DayKey>,
    {
        let restored: BTreeSet<DayKey> = keys
            .into_iter()
            .filter(|&k| availability.contains(k))
            .collect();
        if restored == self.selected {
            return None;
        }
        self.selected = restored;
        self.last_clicked = None;
        Some(self.changed(false))
    }

    /// Moves the cursor by `delta` months.
    pub fn shift_month(&mut self, delta: i32) -> YearMonth {
        self.move_cursor(self.cursor.shift_months(delta))
    }

    /// Moves the cursor by `delta` years.
    pub fn shift_year(&mut self, delta: i32) -> YearMonth {
        self.move_cursor(self.cursor.shift_years(delta))
    }

    /// Prev/next control: one month, one year or one year page depending on
    /// the view mode.
    pub fn step(&mut self, delta: i32) -> YearMonth {
        match self.mode {
            ViewMode::Day => self.shift_month(delta),
            ViewMode::Month => self.shift_year(delta),
            ViewMode::Year => self.shift_year(delta.saturating_mul(YEAR_PAGE_STEP)),
        }
    }

    /// Shows the month containing `key` in the day view.
    pub fn go_to(&mut self, key: DayKey) -> YearMonth {
        self.mode = ViewMode::Day;
        self.move_cursor(YearMonth::of(key))
    }

    /// Shows the current month in the day view.
    pub fn go_to_today(&mut self) -> YearMonth {
        self.go_to(self.today)
    }

    /// Title click: cycles Day -> Month -> Year -> Day.
    pub fn click_title(&mut self) -> ViewMode {
        self.mode = self.mode.next();
        self.mode
    }

    /// Mode-toggle control: same cycle as the title.
    pub fn toggle_mode(&mut self) -> ViewMode {
        self.click_title()
    }

    /// Year cell click: shows the months of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if `year` is outside the supported range.
    pub fn drill_into_year(&mut self, year: i32) -> Result<ViewMode, CalendarError> {
        let target = self.cursor.with_year(year)?;
        self.move_cursor(target);
        self.mode = ViewMode::Month;
        Ok(self.mode)
    }

    /// Month cell click: shows the days of `month` (1..=12) of the cursor year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn drill_into_month(&mut self, month: u8) -> Result<ViewMode, CalendarError> {
        let target = self.cursor.with_month(month)?;
        self.move_cursor(target);
        self.mode = ViewMode::Day;
        Ok(self.mode)
    }

    /// Restricts cursor movement to the months spanned by `bounds`.
    ///
    /// `None` lifts the restriction. The cursor is pulled inside the new
    /// bounds immediately.
    pub fn set_navigation_bounds(&mut self, bounds: Option<Bounds>) {
        self.nav_bounds = bounds.map(|b| (YearMonth::of(b.min), YearMonth::of(b.max)));
        self.cursor = self.clamp(self.cursor);
    }

    /// Returns the day grid for the cursor month.
    pub fn month_grid<I>(&self, availability: &AvailabilityIndex<I>) -> MonthGrid {
        MonthGrid::build(
            self.cursor,
            &self.config,
            availability,
            &self.selected,
            self.today,
        )
    }

    /// Returns the month cells for the cursor year.
    pub fn month_picker<I>(&self, availability: &AvailabilityIndex<I>) -> MonthPicker {
        MonthPicker::build(self.cursor, availability)
    }

    /// Returns the year page containing the cursor year.
    pub fn year_picker<I>(&self, availability: &AvailabilityIndex<I>) -> YearPicker {
        YearPicker::build(self.cursor.year(), availability)
    }

    fn move_cursor(&mut self, target: YearMonth) -> YearMonth {
        self.cursor = self.clamp(target);
        self.cursor
    }

    fn clamp(&self, target: YearMonth) -> YearMonth {
        match self.nav_bounds {
            Some((lo, hi)) => target.clamp(lo, hi),
            None => target,
        }
    }

    fn changed(&self, additive: bool) -> SelectionEvent {
        SelectionEvent::Changed(SelectionChanged::new(self.selected.clone(), additive))
    }
}
