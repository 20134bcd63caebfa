//! Free-form date parsing and UTC day-boundary reconciliation.
//!
//! Analytics datasets are published per UTC calendar day. A caller ahead of
//! UTC can ask for a day that does not exist upstream yet, so requested dates
//! are compared against the UTC calendar day as plain `(year, month, day)`
//! triples, never as timestamps.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::types::DateCorrection;

/// Accepted date layouts, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%Y%m%d",
];

/// Accepted date-and-time layouts; only the calendar day is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Leading weekday name, e.g. `Friday, ` or `Fri `.
fn weekday_regex() -> Option<&'static Regex> {
    static WEEKDAY: OnceLock<Option<Regex>> = OnceLock::new();
    WEEKDAY
        .get_or_init(|| {
            Regex::new(
                r"(?i)^(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues|tue|wed|thurs|thu|fri|sat|sun)\.?,?\s+",
            )
            .ok()
        })
        .as_ref()
}

/// Ordinal day suffix, e.g. the `th` in `5th`.
fn ordinal_regex() -> Option<&'static Regex> {
    static ORDINAL: OnceLock<Option<Regex>> = OnceLock::new();
    ORDINAL
        .get_or_init(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").ok())
        .as_ref()
}

/// Drop the decorations chrono layouts cannot express: a leading weekday,
/// ordinal suffixes and repeated spaces.
fn simplify(text: &str) -> String {
    let text = match weekday_regex() {
        Some(re) => re.replace(text, ""),
        None => text.into(),
    };
    let text = match ordinal_regex() {
        Some(re) => re.replace_all(&text, "$1").into_owned(),
        None => text.into_owned(),
    };
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_known(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|timestamp| timestamp.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .or_else(|_| DateTime::parse_from_rfc2822(text))
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// The current calendar day in UTC.
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a free-form date, defaulting to today's UTC date.
///
/// Empty text means "today". Text that matches none of the known layouts is
/// logged and also treated as today; parse failures never reach the caller.
pub fn parse_date(text: &str) -> NaiveDate {
    parse_date_or(text, utc_today())
}

/// [`parse_date`] with an explicit fallback day.
pub fn parse_date_or(text: &str, today: NaiveDate) -> NaiveDate {
    let text = text.trim();
    if text.is_empty() {
        return today;
    }

    if let Some(date) = parse_known(text).or_else(|| parse_known(&simplify(text))) {
        return date;
    }

    tracing::warn!(input = text, "failed to parse date, using today");
    today
}

/// `true` if `date` is on or before the current UTC calendar day.
pub fn is_before_utc_today(date: NaiveDate) -> bool {
    is_on_or_before(date, utc_today())
}

/// Compare two days by year, then month, then day.
pub fn is_on_or_before(date: NaiveDate, today: NaiveDate) -> bool {
    (date.year(), date.month(), date.day()) <= (today.year(), today.month(), today.day())
}

/// Step a date that is still in the future for UTC back by one day.
///
/// The correction is applied at most once; a date several days ahead is
/// moved back a single day and not searched further.
pub fn correct_for_utc(requested: NaiveDate, today: NaiveDate) -> DateCorrection {
    let resolved = if is_on_or_before(requested, today) {
        requested
    } else {
        requested.pred_opt().unwrap_or(requested)
    };
    DateCorrection {
        requested,
        resolved,
    }
}

/// Render a day the way users see it, e.g. `June 05 2020`.
pub fn format_human(date: NaiveDate) -> String {
    date.format("%B %d %Y").to_string()
}
