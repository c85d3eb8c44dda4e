//! End-to-end widget behavior against a recording host.

use almanac::calendar::{CalendarDate, DateInput, DayKey, WeekStart, YearMonth};
use almanac::filter::{ApplyMode, FilterHost, FilterOperator, FilterTarget};
use almanac::selection::{ClickModifiers, SelectionEvent, ViewMode};
use almanac::{CalendarToml, CalendarWidget, DataUpdate};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Apply(Vec<CalendarDate>, ApplyMode),
    Remove,
}

#[derive(Debug, Default)]
struct RecordingHost {
    target: Option<FilterTarget>,
    calls: Vec<Call>,
}

impl FilterHost for RecordingHost {
    fn apply_filter(
        &mut self,
        target: &FilterTarget,
        operator: FilterOperator,
        values: &[CalendarDate],
        mode: ApplyMode,
    ) {
        assert_eq!(operator, FilterOperator::In);
        assert!(!values.is_empty(), "empty In filter sent");
        self.target = Some(target.clone());
        self.calls.push(Call::Apply(values.to_vec(), mode));
    }

    fn remove_filter(&mut self, target: &FilterTarget) {
        self.target = Some(target.clone());
        self.calls.push(Call::Remove);
    }
}

fn key(text: &str) -> DayKey {
    DateInput::from(text).to_day_key().unwrap()
}

fn dates(texts: &[&str]) -> Vec<CalendarDate> {
    texts.iter().map(|t| key(t).date()).collect()
}

fn update(query_name: &str, values: &[&str]) -> DataUpdate<String> {
    values
        .iter()
        .fold(DataUpdate::new(query_name), |u, v| u.with_row(*v, format!("row-{v}")))
}

fn widget(config: &CalendarToml) -> CalendarWidget<String, RecordingHost> {
    CalendarWidget::with_today(config, RecordingHost::default(), key("2024-03-15"))
}

#[test]
fn full_interaction() {
    let mut w = widget(&CalendarToml::default());
    w.on_data_update(update("Sales.OrderDate", &["2024-03-01", "2024-03-05", "2024-03-08"]));

    w.on_day_click(key("2024-03-01"), ClickModifiers::NONE);
    w.on_day_click(key("2024-03-08"), ClickModifiers::SHIFT);
    w.on_clear();

    let host = w.host();
    assert_eq!(host.target, Some(FilterTarget::new("Sales", "OrderDate")));
    assert_eq!(
        host.calls,
        vec![
            Call::Apply(dates(&["2024-03-01"]), ApplyMode::Replace),
            Call::Apply(
                dates(&["2024-03-01", "2024-03-05", "2024-03-08"]),
                ApplyMode::Merge
            ),
            Call::Remove,
        ]
    );
}

#[test]
fn mixed_inputs_share_day_keys() {
    let mut w = widget(&CalendarToml::default());
    let mut u: DataUpdate<String> = DataUpdate::new("t.d");
    u.push(Some(DateInput::from("2024-03-01T23:59:59Z")), "a".to_string());
    u.push(Some(DateInput::from("2024-03-01")), "b".to_string());
    u.push(Some(DateInput::EpochMillis(1_709_251_200_000)), "c".to_string());
    u.push(None, "d".to_string());
    u.push(Some(DateInput::from("banana")), "e".to_string());
    let report = w.on_data_update(u);

    assert_eq!(report.ingested(), 1);
    assert_eq!(report.duplicates(), 2);
    assert_eq!(report.nulls(), 1);
    assert_eq!(report.invalid(), 1);
    let id = w.availability().source_identity_of(key("2024-03-01"));
    assert_eq!(id.map(String::as_str), Some("c"));
}

#[test]
fn data_shrink_reemits_corrected_selection() {
    let mut w = widget(&CalendarToml::default());
    w.on_data_update(update("t.d", &["2024-03-03", "2024-03-04", "2024-03-05"]));
    w.on_day_click(key("2024-03-03"), ClickModifiers::NONE);
    w.on_day_click(key("2024-03-05"), ClickModifiers::SHIFT);

    w.on_data_update(update("t.d", &["2024-03-03", "2024-03-05"]));
    assert_eq!(
        w.host().calls.last(),
        Some(&Call::Apply(dates(&["2024-03-03", "2024-03-05"]), ApplyMode::Replace))
    );
}

#[test]
fn data_removed_entirely_removes_filter() {
    let mut w = widget(&CalendarToml::default());
    w.on_data_update(update("t.d", &["2024-03-03"]));
    w.on_day_click(key("2024-03-03"), ClickModifiers::NONE);
    w.on_data_update(update("t.d", &[]));
    assert_eq!(w.host().calls.last(), Some(&Call::Remove));
    assert_eq!(w.engine().cursor(), YearMonth::of(key("2024-03-15")));
}

#[test]
fn unresolved_query_name_keeps_ui_working() {
    let mut w = widget(&CalendarToml::default());
    w.on_data_update(update("OrderDate", &["2024-03-01"]));
    assert!(w.filter_target().is_none());
    let event = w.on_day_click(key("2024-03-01"), ClickModifiers::NONE);
    assert!(matches!(event, Some(SelectionEvent::Changed(_))));
    assert!(w.host().calls.is_empty());
    assert_eq!(w.selected_identities().len(), 1);
}

#[test]
fn disabled_modifiers_fall_back_to_single() {
    let config = CalendarToml::from_toml_str(
        r#"
        multiSelectEnabled = false
        rangeSelectEnabled = false
        "#,
    )
    .unwrap();
    let mut w = widget(&config);
    w.on_data_update(update("t.d", &["2024-03-01", "2024-03-02", "2024-03-03"]));
    w.on_day_click(key("2024-03-01"), ClickModifiers::NONE);
    w.on_day_click(key("2024-03-03"), ClickModifiers::SHIFT);
    w.on_day_click(key("2024-03-02"), ClickModifiers::CTRL);
    assert_eq!(
        w.host().calls,
        vec![
            Call::Apply(dates(&["2024-03-01"]), ApplyMode::Replace),
            Call::Apply(dates(&["2024-03-03"]), ApplyMode::Replace),
            Call::Apply(dates(&["2024-03-02"]), ApplyMode::Replace),
        ]
    );
}

#[test]
fn view_navigation() {
    let config = CalendarToml::from_toml_str(r#"startOfWeek = "Monday""#).unwrap();
    let mut w = widget(&config);
    w.on_data_update(update("t.d", &["2019-07-04", "2024-03-01"]));

    assert_eq!(w.month_grid().weekdays()[0], WeekStart::Monday.weekday());
    assert_eq!(w.click_title(), ViewMode::Month);
    assert_eq!(w.click_title(), ViewMode::Year);
    let page = w.year_picker();
    assert_eq!(page.decade(), 2020);
    assert!(page.cells().iter().any(|c| c.year == 2019 && c.has_data));

    assert_eq!(w.drill_into_year(2019).unwrap(), ViewMode::Month);
    let months = w.month_picker();
    assert!(months.cells()[6].has_data);
    assert_eq!(w.drill_into_month(7).unwrap(), ViewMode::Day);
    assert_eq!(w.engine().cursor(), YearMonth::new(2019, 7).unwrap());
    assert!(w.drill_into_month(13).is_err());

    assert_eq!(w.go_to_today(), YearMonth::new(2024, 3).unwrap());
    assert_eq!(w.step(-1), YearMonth::new(2024, 2).unwrap());
}

#[test]
fn grid_marks_selection() {
    let mut w = widget(&CalendarToml::default());
    w.on_data_update(update("t.d", &["2024-03-01", "2024-03-05"]));
    w.on_day_click(key("2024-03-05"), ClickModifiers::NONE);
    let grid = w.month_grid();
    assert!(grid.cell(key("2024-03-05")).unwrap().selected);
    assert!(!grid.cell(key("2024-03-01")).unwrap().selected);
    assert!(grid.cell(key("2024-03-15")).unwrap().today);
}

#[test]
fn into_host_returns_recorded_calls() {
    let mut w = widget(&CalendarToml::default());
    w.on_data_update(update("t.d", &["2024-03-01"]));
    w.on_clear();
    let host = w.into_host();
    assert_eq!(host.calls, vec![Call::Remove]);
}
