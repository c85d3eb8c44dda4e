//! Host configuration snapshot.
//!
//! Field names follow the host's camelCase property names. Unknown fields
//! are ignored so hosts can carry extra properties alongside ours. A
//! recognized field holding null or a value of the wrong type takes its
//! default, with a warning, and the rest of the snapshot is kept.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Recognized widget options, as delivered by the host.
///
/// Values are kept raw here; [`crate::convert`] validates them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarToml {
    /// `"Sunday"` or `"Monday"`, case-insensitive. `0` and `1` are accepted
    /// as numbers or strings.
    #[serde(default = "default_start_of_week", deserialize_with = "lenient_start_of_week")]
    pub start_of_week: String,

    /// Show an ISO week number column.
    #[serde(default, deserialize_with = "lenient")]
    pub show_week_numbers: bool,

    /// Show the day-of-week header row.
    #[serde(default = "default_true", deserialize_with = "lenient_true", rename = "showDOWHeader")]
    pub show_dow_header: bool,

    /// Fade days of the neighbouring months.
    #[serde(default = "default_true", deserialize_with = "lenient_true")]
    pub other_month_fade: bool,

    /// Allow ctrl-click toggling.
    #[serde(default = "default_true", deserialize_with = "lenient_true")]
    pub multi_select_enabled: bool,

    /// Allow shift-click ranges.
    #[serde(default = "default_true", deserialize_with = "lenient_true")]
    pub range_select_enabled: bool,

    /// Keep the selection across data updates.
    #[serde(default = "default_true", deserialize_with = "lenient_true")]
    pub sticky_selection: bool,

    /// Restrict navigation to the months that hold data.
    #[serde(default, deserialize_with = "lenient")]
    pub respect_data_range: bool,

    /// Earliest selectable date.
    #[serde(default, deserialize_with = "lenient")]
    pub min_date: Option<String>,

    /// Latest selectable date.
    #[serde(default, deserialize_with = "lenient")]
    pub max_date: Option<String>,

    /// Title bar styling.
    #[serde(default, deserialize_with = "lenient")]
    pub header: StyleToml,

    /// Day cell styling.
    #[serde(default, deserialize_with = "lenient")]
    pub item: StyleToml,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            start_of_week: default_start_of_week(),
            show_week_numbers: false,
            show_dow_header: true,
            other_month_fade: true,
            multi_select_enabled: true,
            range_select_enabled: true,
            sticky_selection: true,
            respect_data_range: false,
            min_date: None,
            max_date: None,
            header: StyleToml::default(),
            item: StyleToml::default(),
        }
    }
}

/// Presentation-only styling. Passed through to renderers untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleToml {
    #[serde(default, deserialize_with = "lenient")]
    pub font_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub background: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub font_size: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub font_family: Option<String>,
}

fn default_start_of_week() -> String {
    "Sunday".to_string()
}
fn default_true() -> bool {
    true
}

/// Deserializes `T`, substituting `default()` for null or a value of the
/// wrong type.
fn lenient_or<'de, D, T>(deserializer: D, default: fn() -> T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(default());
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            warn!(%value, error = %e, "invalid configuration value, using default");
            Ok(default())
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient_or(deserializer, T::default)
}

fn lenient_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_or(deserializer, default_true)
}

fn lenient_start_of_week<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(default_start_of_week()),
        other => {
            warn!(value = %other, "invalid startOfWeek, using default");
            Ok(default_start_of_week())
        }
    }
}

impl CalendarToml {
    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parses a JSON object, the form host metadata usually arrives in.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Reads a configuration file. `.json` files are parsed as JSON, anything
/// else as TOML.
pub fn load(path: impl AsRef<Path>) -> Result<CalendarToml> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        CalendarToml::from_json_str(&text).context("failed to parse JSON config")?
    } else {
        CalendarToml::from_toml_str(&text).context("failed to parse TOML config")?
    };
    Ok(config)
}
