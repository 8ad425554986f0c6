//! Safe date normalization and formatting
//!
//! Record date fields arrive in whatever shape the backend or a form produced:
//! ISO strings, loosely formatted strings, epoch milliseconds, nothing at all.
//! [`parse_date`] maps every one of them to either a valid UTC timestamp or
//! [`NormalizedDate::Invalid`]; [`format_date`] renders the result or returns a
//! fallback string. Neither function panics.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt::Write;

/// Default display pattern (`Mar 15, 2024`)
pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

/// Text shown when a date cannot be displayed
pub const DEFAULT_FALLBACK: &str = "N/A";

const ISO_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const ISO_OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

// `%B` also accepts the abbreviated month name when parsing
const LENIENT_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%d %B %Y %H:%M:%S",
];

const LENIENT_DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%a %B %d %Y",
    "%a, %B %d, %Y",
];

// `Date.prototype.toString()` output once the `(zone name)` suffix is cut
const JS_DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Raw date representation as stored on a record.
///
/// Deserializes from any JSON value: `null` (or a missing field with
/// `#[serde(default)]`) becomes [`DateInput::Absent`], strings and numbers keep
/// their shape, anything else lands in [`DateInput::Other`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    #[default]
    Absent,
    Text(String),
    Timestamp(Number),
    Native(DateTime<Utc>),
    Other(Value),
}

/// Outcome of normalizing a [`DateInput`].
///
/// Ordering puts every valid date before `Invalid`, so an ascending sort on
/// this type places unparseable dates last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NormalizedDate {
    Valid(DateTime<Utc>),
    Invalid,
}

impl NormalizedDate {
    pub fn is_valid(&self) -> bool {
        matches!(self, NormalizedDate::Valid(_))
    }

    /// The timestamp, or `None` for the invalid sentinel
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            NormalizedDate::Valid(dt) => Some(*dt),
            NormalizedDate::Invalid => None,
        }
    }

    /// Render with a strftime pattern, or return `fallback`
    pub fn format(&self, pattern: &str, fallback: &str) -> String {
        match self {
            NormalizedDate::Valid(dt) => render(dt, pattern).unwrap_or_else(|| fallback.to_string()),
            NormalizedDate::Invalid => fallback.to_string(),
        }
    }
}

impl DateInput {
    /// Shorthand for [`parse_date`]
    pub fn normalize(&self) -> NormalizedDate {
        parse_date(self)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DateInput::Absent)
    }

    /// Render with the default pattern and fallback (`Mar 15, 2024` / `N/A`)
    pub fn display(&self) -> String {
        format_date(self, DEFAULT_DATE_FORMAT, DEFAULT_FALLBACK)
    }
}

/// Normalize any date representation.
///
/// Precedence: absent is invalid; native values pass through; strings try
/// strict ISO-8601 first and then a lenient set of common layouts; numbers
/// are epoch milliseconds; everything else is invalid. Naive values are read
/// as UTC.
pub fn parse_date(input: &DateInput) -> NormalizedDate {
    match input {
        DateInput::Absent => NormalizedDate::Invalid,
        DateInput::Native(dt) => NormalizedDate::Valid(*dt),
        DateInput::Text(text) => parse_text(text),
        DateInput::Timestamp(n) => parse_timestamp(n),
        DateInput::Other(Value::String(text)) => parse_text(text),
        DateInput::Other(Value::Number(n)) => parse_timestamp(n),
        DateInput::Other(_) => NormalizedDate::Invalid,
    }
}

/// Normalize and render `input`; any failure yields `fallback`
pub fn format_date(input: &DateInput, pattern: &str, fallback: &str) -> String {
    parse_date(input).format(pattern, fallback)
}

fn parse_text(text: &str) -> NormalizedDate {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return NormalizedDate::Invalid;
    }

    parse_iso(trimmed)
        .or_else(|| parse_lenient(trimmed))
        .map(NormalizedDate::Valid)
        .unwrap_or(NormalizedDate::Invalid)
}

fn parse_iso(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ISO_OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in ISO_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(midnight(date));
    }

    // Reduced precision: `YYYY-MM` and `YYYY`
    match text.len() {
        7 if text.as_bytes()[4] == b'-' => {
            NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d")
                .ok()
                .map(midnight)
        }
        4 if text.bytes().all(|b| b.is_ascii_digit()) => text
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .map(midnight),
        _ => None,
    }
}

fn parse_lenient(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    let js = text.split_once(" (").map_or(text, |(head, _)| head);
    if let Ok(dt) = DateTime::parse_from_str(js, JS_DATE_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in LENIENT_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    LENIENT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(midnight)
}

fn parse_timestamp(n: &Number) -> NormalizedDate {
    let millis = match n.as_i64() {
        Some(ms) => Some(ms),
        None => n
            .as_f64()
            .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f.trunc() as i64),
    };

    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(NormalizedDate::Valid)
        .unwrap_or(NormalizedDate::Invalid)
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn render(dt: &DateTime<Utc>, pattern: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }

    let mut out = String::new();
    write!(out, "{}", dt.format_with_items(items.iter())).ok()?;
    Some(out)
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(Number::from(value))
    }
}

impl From<f64> for DateInput {
    fn from(value: f64) -> Self {
        // NaN and infinities have no JSON number form
        match Number::from_f64(value) {
            Some(n) => DateInput::Timestamp(n),
            None => DateInput::Other(Value::Null),
        }
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Native(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Native(midnight(value))
    }
}

impl From<&Value> for DateInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => DateInput::Absent,
            Value::String(s) => DateInput::Text(s.clone()),
            Value::Number(n) => DateInput::Timestamp(n.clone()),
            other => DateInput::Other(other.clone()),
        }
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
