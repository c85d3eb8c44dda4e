//! The availability index proper.

use std::collections::{BTreeSet, HashMap};

use almanac_calendar::{DateInput, DayKey, YearMonth};
use tracing::{debug, trace, warn};

use crate::report::RebuildReport;
use crate::window::DateWindow;

/// Inclusive extremes of a non-empty availability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Earliest available day.
    pub min: DayKey,
    /// Latest available day.
    pub max: DayKey,
}

impl Bounds {
    /// Returns `true` if `key` lies within the extremes.
    pub fn contains(&self, key: DayKey) -> bool {
        self.min <= key && key <= self.max
    }
}

/// Set of selectable days with one opaque identity token per day.
///
/// `I` is whatever the host uses to identify the source row of a day; the
/// index stores and returns it but never inspects it.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex<I> {
    identities: HashMap<DayKey, I>,
    bounds: Option<Bounds>,
    window: DateWindow,
}

impl<I> Default for AvailabilityIndex<I> {
    fn default() -> Self {
        Self {
            identities: HashMap::new(),
            bounds: None,
            window: DateWindow::unbounded(),
        }
    }
}

impl<I> AvailabilityIndex<I> {
    /// Creates an empty index with no window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index that clamps future rebuilds to `window`.
    pub fn with_window(window: DateWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Returns the window applied by rebuilds.
    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Replaces the window. Takes effect at the next rebuild.
    pub fn set_window(&mut self, window: DateWindow) {
        self.window = window;
    }

    /// Replaces the whole index with the days found in `rows`.
    ///
    /// Each row is an optional date-like value and the identity token of the
    /// row it came from. Null rows, values that fail to parse and days outside
    /// the window are skipped. When several rows map to the same day, the
    /// identity of the last one wins.
    #[tracing::instrument(skip_all, fields(window = ?self.window))]
    pub fn rebuild<R>(&mut self, rows: R) -> RebuildReport
    where
        R: IntoIterator<Item = (Option<DateInput>, I)>,
    {
        let mut report = RebuildReport::default();
        let mut identities = HashMap::new();
        let mut bounds: Option<Bounds> = None;

        for (value, identity) in rows {
            report.rows += 1;
            let Some(value) = value else {
                report.nulls += 1;
                continue;
            };
            let key = match value.to_day_key() {
                Ok(key) => key,
                Err(e) => {
                    trace!(error = %e, "skipping unparseable row");
                    report.invalid += 1;
                    continue;
                }
            };
            if !self.window.contains(key) {
                report.out_of_window += 1;
                continue;
            }
            if identities.insert(key, identity).is_some() {
                report.duplicates += 1;
            }
            bounds = Some(match bounds {
                None => Bounds { min: key, max: key },
                Some(b) => Bounds {
                    min: b.min.min(key),
                    max: b.max.max(key),
                },
            });
        }

        report.ingested = identities.len();
        self.identities = identities;
        self.bounds = bounds;

        if report.invalid > 0 {
            warn!(
                invalid = report.invalid,
                rows = report.rows,
                "ignored rows that are not dates"
            );
        }
        debug!(
            ingested = report.ingested,
            duplicates = report.duplicates,
            nulls = report.nulls,
            out_of_window = report.out_of_window,
            bounds = ?self.bounds,
            "availability rebuilt"
        );
        report
    }

    /// Returns `true` if `key` is selectable.
    pub fn contains(&self, key: DayKey) -> bool {
        self.identities.contains_key(&key)
    }

    /// Returns the identity token recorded for `key`.
    pub fn source_identity_of(&self, key: DayKey) -> Option<&I> {
        self.identities.get(&key)
    }

    /// Returns the earliest and latest available days, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Returns the number of available days.
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Returns `true` if no day is available.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Returns the available days in ascending order.
    pub fn keys(&self) -> Vec<DayKey> {
        let mut keys: Vec<DayKey> = self.identities.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Returns `(day, identity)` for every key of `keys` that is available.
    pub fn identities_for<K>(&self, keys: K) -> Vec<(DayKey, &I)>
    where
        K: IntoIterator<Item = DayKey>,
    {
        keys.into_iter()
            .filter_map(|k| self.identities.get(&k).map(|id| (k, id)))
            .collect()
    }

    /// Returns, per month of `year` (index 0 = January), whether any day in
    /// that month is available.
    pub fn months_with_data(&self, year: i32) -> [bool; 12] {
        let mut months = [false; 12];
        for &key in self.identities.keys() {
            let ym = YearMonth::of(key);
            if ym.year() == year {
                months[usize::from(ym.month()) - 1] = true;
            }
        }
        months
    }

    /// Returns the years that contain at least one available day.
    pub fn years_with_data(&self) -> BTreeSet<i32> {
        self.identities
            .keys()
            .map(|&k| YearMonth::of(k).year())
            .collect()
    }

    /// Returns `true` if any day of `year` is available.
    pub fn has_data_in_year(&self, year: i32) -> bool {
        self.identities.keys().any(|&k| YearMonth::of(k).year() == year)
    }

    /// Returns `true` if any day of `month` is available.
    pub fn has_data_in_month(&self, month: YearMonth) -> bool {
        self.identities.keys().any(|&k| month.contains(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(y: i32, m: u8, d: u8) -> DayKey {
        DayKey::from_ymd(y, m, d).unwrap()
    }

    fn row(text: &str, id: u32) -> (Option<DateInput>, u32) {
        (Some(DateInput::from(text)), id)
    }

    #[test]
    fn empty_index() {
        let index: AvailabilityIndex<u32> = AvailabilityIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.bounds(), None);
        assert!(index.keys().is_empty());
    }

    #[test]
    fn rebuild_tracks_bounds() {
        let mut index = AvailabilityIndex::new();
        index.rebuild(vec![
            row("2024-03-08", 1),
            row("2024-03-01", 2),
            row("2024-03-05", 3),
        ]);
        assert_eq!(
            index.bounds(),
            Some(Bounds {
                min: key(2024, 3, 1),
                max: key(2024, 3, 8),
            })
        );
        assert_eq!(index.keys(), vec![key(2024, 3, 1), key(2024, 3, 5), key(2024, 3, 8)]);
    }

    #[test]
    fn rebuild_skips_nulls_and_garbage() {
        let mut index = AvailabilityIndex::new();
        let report = index.rebuild(vec![
            (None, 0),
            row("not a date", 1),
            row("2023-02-29", 2),
            row("2024-03-01", 3),
        ]);
        assert_eq!(report.rows(), 4);
        assert_eq!(report.nulls(), 1);
        assert_eq!(report.invalid(), 2);
        assert_eq!(report.ingested(), 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn duplicate_day_keeps_last_identity() {
        let mut index = AvailabilityIndex::new();
        let report = index.rebuild(vec![
            row("2024-03-01", 1),
            row("2024-03-01T15:00:00Z", 2),
            row("2024-03-02", 3),
        ]);
        assert_eq!(report.duplicates(), 1);
        assert_eq!(index.len(), 2);
        assert_eq!(index.source_identity_of(key(2024, 3, 1)), Some(&2));
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut index = AvailabilityIndex::new();
        index.rebuild(vec![row("2024-03-01", 1), row("2024-03-02", 2)]);
        index.rebuild(vec![row("2025-01-01", 9)]);
        assert!(!index.contains(key(2024, 3, 1)));
        assert!(index.contains(key(2025, 1, 1)));
        assert_eq!(index.bounds().unwrap().min, key(2025, 1, 1));
    }

    #[test]
    fn rebuild_to_empty_clears_bounds() {
        let mut index = AvailabilityIndex::new();
        index.rebuild(vec![row("2024-03-01", 1)]);
        index.rebuild(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.bounds(), None);
    }

    #[test]
    fn window_filters_rows() {
        let window = DateWindow::new(Some(key(2024, 3, 2)), Some(key(2024, 3, 4)));
        let mut index = AvailabilityIndex::with_window(window);
        let report = index.rebuild(vec![
            row("2024-03-01", 1),
            row("2024-03-02", 2),
            row("2024-03-04", 3),
            row("2024-03-05", 4),
        ]);
        assert_eq!(report.out_of_window(), 2);
        assert_eq!(index.keys(), vec![key(2024, 3, 2), key(2024, 3, 4)]);
    }

    #[test]
    fn set_window_applies_on_next_rebuild() {
        let mut index = AvailabilityIndex::new();
        let rows = vec![row("2024-03-01", 1), row("2024-03-09", 2)];
        index.rebuild(rows.clone());
        index.set_window(DateWindow::new(None, Some(key(2024, 3, 5))));
        assert_eq!(index.len(), 2);
        index.rebuild(rows);
        assert_eq!(index.keys(), vec![key(2024, 3, 1)]);
    }

    #[test]
    fn identities_for_skips_unavailable() {
        let mut index = AvailabilityIndex::new();
        index.rebuild(vec![row("2024-03-01", 1), row("2024-03-03", 3)]);
        let found = index.identities_for([key(2024, 3, 1), key(2024, 3, 2), key(2024, 3, 3)]);
        assert_eq!(found, vec![(key(2024, 3, 1), &1), (key(2024, 3, 3), &3)]);
    }

    #[test]
    fn months_and_years_with_data() {
        let mut index = AvailabilityIndex::new();
        index.rebuild(vec![
            row("2023-12-31", 1),
            row("2024-02-10", 2),
            row("2024-11-01", 3),
        ]);
        let months = index.months_with_data(2024);
        assert!(months[1]);
        assert!(months[10]);
        assert_eq!(months.iter().filter(|&&m| m).count(), 2);
        assert!(index.has_data_in_year(2023));
        assert!(index.has_data_in_year(2024));
        assert!(!index.has_data_in_year(2025));
        assert_eq!(index.years_with_data(), BTreeSet::from([2023, 2024]));
        assert!(index.has_data_in_month(YearMonth::new(2024, 2).unwrap()));
        assert!(!index.has_data_in_month(YearMonth::new(2024, 3).unwrap()));
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds {
            min: key(2024, 3, 1),
            max: key(2024, 3, 8),
        };
        assert!(b.contains(key(2024, 3, 4)));
        assert!(!b.contains(key(2024, 3, 9)));
    }
}
