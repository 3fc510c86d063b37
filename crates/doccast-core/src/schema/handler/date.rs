use super::numeric;
use crate::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Naive forms are read as UTC. `%.f` also matches a missing fraction.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

/// What a date input resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DateInput {
    /// Seconds since the Unix epoch
    At(i64),

    /// The current instant, taken when the value is built
    Now,
}

impl DateInput {
    pub(super) fn into_bson(self) -> bson::DateTime {
        match self {
            Self::At(secs) => bson::DateTime::from_millis(secs.saturating_mul(1000)),
            Self::Now => bson::DateTime::now(),
        }
    }
}

/// Numbers (and numeric strings) are Unix timestamps, truncated to whole
/// seconds. Other input is parsed as a date string.
///
/// A zero timestamp or an unparsable string resolves to [`DateInput::Now`].
/// A string that parses to the current second stays [`DateInput::At`].
pub(super) fn resolve(value: &Value) -> DateInput {
    let input = if numeric::is_numeric(value) {
        DateInput::At(numeric::to_i64(value))
    } else {
        let src = numeric::to_string(value);
        parse(&src).unwrap_or_else(|| {
            log::debug!("unparsable date {src:?}; using the current time");
            DateInput::Now
        })
    };

    match input {
        DateInput::At(0) => DateInput::Now,
        input => input,
    }
}

fn parse(src: &str) -> Option<DateInput> {
    let src = src.trim();

    if src.eq_ignore_ascii_case("now") {
        return Some(DateInput::Now);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(src) {
        return Some(DateInput::At(dt.timestamp()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(src) {
        return Some(DateInput::At(dt.timestamp()));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(src, format) {
            return Some(DateInput::At(dt.timestamp()));
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(src, format) {
            return Some(DateInput::At(dt.and_utc().timestamp()));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(src, format) {
            let dt = date.and_hms_opt(0, 0, 0)?;
            return Some(DateInput::At(dt.and_utc().timestamp()));
        }
    }

    None
}
