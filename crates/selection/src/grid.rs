//! Presentation models for the day, month and year views.
//!
//! These carry everything a renderer needs to draw a view (cell keys,
//! enablement, selection and week numbers) without any layout or styling.

use std::collections::BTreeSet;

use almanac_availability::AvailabilityIndex;
use almanac_calendar::{DayKey, IsoWeek, Weekday, YearMonth, day_range};

use crate::config::SelectionConfig;

/// Rows in a day grid. Six weeks always cover any month at any offset.
pub const GRID_ROWS: usize = 6;

/// Years on one page of the year view.
pub const YEARS_PER_PAGE: usize = 12;

/// One cell of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The day shown in this cell.
    pub key: DayKey,
    /// Day of the month (1..=31).
    pub day: u8,
    /// `false` for leading/trailing days of the neighbouring months.
    pub in_month: bool,
    /// `true` for neighbouring-month days when fading is enabled.
    pub faded: bool,
    /// `true` if the day is available and may be clicked.
    pub selectable: bool,
    /// `true` if the day is part of the selection.
    pub selected: bool,
    /// `true` for the current day.
    pub today: bool,
}

/// One row of the day grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    /// ISO week of the row, taken from its Monday. `None` when week
    /// numbers are disabled.
    pub iso_week: Option<IsoWeek>,
    /// Seven cells in column order.
    pub cells: Vec<DayCell>,
}

/// Day view of one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    weekdays: [Weekday; 7],
    leading: u8,
    rows: Vec<WeekRow>,
}

impl MonthGrid {
    /// Lays out `month` as six rows of seven days starting on the configured
    /// week start.
    pub fn build<I>(
        month: YearMonth,
        config: &SelectionConfig,
        availability: &AvailabilityIndex<I>,
        selected: &BTreeSet<DayKey>,
        today: DayKey,
    ) -> Self {
        let week_start = config.week_start();
        let leading = week_start.leading_offset(month);
        let first = month.first_day();
        let start = first.checked_add_days(-i32::from(leading)).unwrap_or(first);
        let end = start
            .checked_add_days((GRID_ROWS * 7) as i32 - 1)
            .unwrap_or(month.last_day());

        let cells: Vec<DayCell> = day_range(start, end)
            .map(|key| {
                let in_month = month.contains(key);
                DayCell {
                    key,
                    day: key.date().day(),
                    in_month,
                    faded: !in_month && config.other_month_fade(),
                    selectable: availability.contains(key),
                    selected: selected.contains(&key),
                    today: key == today,
                }
            })
            .collect();

        let rows = cells
            .chunks(7)
            .map(|week| {
                let iso_week = config.week_numbers().then(|| {
                    let monday = week
                        .iter()
                        .find(|c| c.key.weekday() == Weekday::Mon)
                        .unwrap_or(&week[0]);
                    monday.key.iso_week()
                });
                WeekRow {
                    iso_week,
                    cells: week.to_vec(),
                }
            })
            .collect();

        Self {
            month,
            weekdays: week_start.weekdays(),
            leading,
            rows,
        }
    }

    /// Returns the month shown.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Returns the weekday header in column order.
    pub fn weekdays(&self) -> [Weekday; 7] {
        self.weekdays
    }

    /// Returns the number of cells before the 1st of the month.
    pub fn leading(&self) -> u8 {
        self.leading
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// Returns every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    /// Returns the cell showing `key`, if it is on the grid.
    pub fn cell(&self, key: DayKey) -> Option<&DayCell> {
        self.cells().find(|c| c.key == key)
    }
}

/// One cell of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    /// The month shown.
    pub month: YearMonth,
    /// `true` if any day of the month is available.
    pub has_data: bool,
    /// `true` if this is the cursor month.
    pub current: bool,
}

/// Month view of one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPicker {
    year: i32,
    cells: Vec<MonthCell>,
}

impl MonthPicker {
    /// Lists the twelve months of the cursor year.
    pub fn build<I>(cursor: YearMonth, availability: &AvailabilityIndex<I>) -> Self {
        let has_data = availability.months_with_data(cursor.year());
        let cells = (1..=12u8)
            .filter_map(|m| cursor.with_month(m).ok())
            .map(|month| MonthCell {
                month,
                has_data: has_data[usize::from(month.month()) - 1],
                current: month == cursor,
            })
            .collect();
        Self {
            year: cursor.year(),
            cells,
        }
    }

    /// Returns the year shown.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the twelve month cells, January first.
    pub fn cells(&self) -> &[MonthCell] {
        &self.cells
    }
}

/// One cell of the year view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCell {
    /// The year shown.
    pub year: i32,
    /// `true` if any day of the year is available.
    pub has_data: bool,
    /// `true` if this is the cursor year.
    pub current: bool,
    /// `false` for the padding years before and after the decade.
    pub in_decade: bool,
}

/// Year view: a decade padded by one year on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPicker {
    decade: i32,
    cells: Vec<YearCell>,
}

impl YearPicker {
    /// Lists the page of years around `year`.
    pub fn build<I>(year: i32, availability: &AvailabilityIndex<I>) -> Self {
        let decade = year - year.rem_euclid(10);
        let first = decade.saturating_sub(1);
        let cells = (0..YEARS_PER_PAGE as i32)
            .map(|i| first.saturating_add(i))
            .map(|y| YearCell {
                year: y,
                has_data: availability.has_data_in_year(y),
                current: y == year,
                in_decade: (decade..decade + 10).contains(&y),
            })
            .collect();
        Self { decade, cells }
    }

    /// Returns the first year of the decade shown.
    pub fn decade(&self) -> i32 {
        self.decade
    }

    /// Returns the year cells in ascending order.
    pub fn cells(&self) -> &[YearCell] {
        &self.cells
    }
}
