//! Date Normalizer
//!
//! The backend emits timestamps either as ISO-like strings or as component
//! arrays `[year, month, day, hour, minute, second]` with a 1-based month.
//! Both collapse into a local wall-clock `NaiveDateTime`.

use chrono::{DateTime, Local, Months, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A timestamp as it arrives over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Parts(Vec<i64>),
    Text(String),
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Normalize a raw backend date. Empty input is `None`; anything else is
/// constructed without range validation.
pub fn normalize(raw: Option<&RawDate>) -> Option<NaiveDateTime> {
    match raw? {
        RawDate::Text(text) => from_text(text),
        RawDate::Parts(parts) => from_parts(parts),
    }
}

/// Display form used on the cards
pub fn format_display(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

fn from_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Out-of-range components roll over (month 13 is January of next year),
/// so the result is built by offsetting from January 1st.
fn from_parts(parts: &[i64]) -> Option<NaiveDateTime> {
    let (&year, rest) = parts.split_first()?;
    let component = |index: usize, default: i64| rest.get(index).copied().unwrap_or(default);

    let month_offset = component(0, 1) - 1;
    let day_offset = component(1, 1) - 1;

    let january = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;
    let month_start = if month_offset >= 0 {
        january.checked_add_months(Months::new(u32::try_from(month_offset).ok()?))?
    } else {
        january.checked_sub_months(Months::new(u32::try_from(-month_offset).ok()?))?
    };

    month_start
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_days(day_offset)?)?
        .checked_add_signed(TimeDelta::try_hours(component(2, 0))?)?
        .checked_add_signed(TimeDelta::try_minutes(component(3, 0))?)?
        .checked_add_signed(TimeDelta::try_seconds(component(4, 0))?)
}
