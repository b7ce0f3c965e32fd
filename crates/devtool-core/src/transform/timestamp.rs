//! Unix timestamp and calendar date/time conversion
//!
//! Converts between an integer count of seconds since the Unix epoch and a
//! local-timezone date/time string. The two representations are converted on
//! demand, never kept synchronized; [`now`] produces both from a single
//! wall-clock read so the pair is mutually consistent.
//!
//! Copyright (c) 2025 Devtool Team
//! Licensed under the Apache-2.0 license

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Display format for human-readable date/time output
pub const HUMAN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted input formats for [`to_timestamp`], tried in order.
/// RFC 3339 input is handled separately since it carries its own offset.
const PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// The current instant as both representations, from one clock read
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Seconds since the Unix epoch, as a decimal string
    pub timestamp: String,
    /// The same instant rendered with [`HUMAN_FORMAT`] in local time
    pub human: String,
}

/// Convert an epoch-seconds string to a local date/time string.
///
/// The input must parse as an `i64`; fractional or otherwise non-integer
/// input is rejected rather than truncated. Negative (pre-1970) timestamps
/// are accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] when the input is not an integer or
/// the resulting instant falls outside chrono's representable range.
pub fn to_human(timestamp: &str) -> Result<String> {
    let secs: i64 = timestamp
        .trim()
        .parse()
        .map_err(|_| Error::InvalidTimestamp {
            input: timestamp.to_string(),
        })?;

    let dt = Local
        .timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| Error::InvalidTimestamp {
            input: timestamp.to_string(),
        })?;

    debug!(secs, "converted timestamp to local date/time");
    Ok(dt.format(HUMAN_FORMAT).to_string())
}

/// Convert a date/time string to epoch seconds, rendered as a decimal string.
///
/// Accepts RFC 3339 (offset-carrying) input, then the naive formats in
/// [`PARSE_FORMATS`], then a bare `%Y-%m-%d` date (midnight). Naive input is
/// interpreted in the local timezone; an ambiguous local time (DST fold)
/// resolves to the earliest matching instant.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] when no accepted format matches.
pub fn to_timestamp(human: &str) -> Result<String> {
    let input = human.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.timestamp().to_string());
    }

    let naive = parse_naive(input).ok_or_else(|| Error::InvalidDate {
        input: human.to_string(),
    })?;

    let dt = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| Error::InvalidDate {
            input: human.to_string(),
        })?;

    debug!(input, secs = dt.timestamp(), "parsed date/time to timestamp");
    Ok(dt.timestamp().to_string())
}

/// The current instant as a consistent timestamp/date pair.
///
/// The wall clock is read exactly once; both fields describe the same
/// instant.
pub fn now() -> Snapshot {
    let now: DateTime<Local> = Local::now();
    Snapshot {
        timestamp: now.timestamp().to_string(),
        human: now.format(HUMAN_FORMAT).to_string(),
    }
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    for fmt in PARSE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
