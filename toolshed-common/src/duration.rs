//! Human friendly durations.
//!
//! Durations are written as a sequence of `<number><unit>` parts such as
//! `1d 2h30m` or `1.5h`, optionally prefixed with a sign. Values are signed
//! [`TimeDelta`]s so negative offsets survive a round trip.

use crate::error::{DurationError, Result};
use chrono::TimeDelta;
use regex::Regex;
use std::sync::LazyLock;

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;
const NANOS_PER_WEEK: i128 = 7 * NANOS_PER_DAY;
const NANOS_PER_YEAR: i128 = 365 * NANOS_PER_DAY;

const PART_PATTERN: &str = r"(\d+(?:\.\d+)?)([a-zµ]+)";

static PART: LazyLock<Regex> = LazyLock::new(|| Regex::new(PART_PATTERN).unwrap());
static VALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^[+-]?(?:{PART_PATTERN})+$")).unwrap());

fn unit_nanos(unit: &str) -> Option<i128> {
    let nanos = match unit {
        "ns" | "nsec" | "nsecs" | "nanosecond" | "nanoseconds" => 1,
        "µs" | "us" | "musec" | "musecs" | "microsecond" | "microseconds" => NANOS_PER_MICRO,
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => NANOS_PER_MILLI,
        "s" | "sec" | "secs" | "second" | "seconds" => NANOS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => NANOS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => NANOS_PER_HOUR,
        "d" | "day" | "days" => NANOS_PER_DAY,
        "w" | "wk" | "wks" | "week" | "weeks" => NANOS_PER_WEEK,
        "y" | "yr" | "yrs" | "year" | "years" => NANOS_PER_YEAR,
        _ => return None,
    };
    Some(nanos)
}

/// Removes all whitespace and lowercases.
fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn from_nanos(nanos: i128, input: &str) -> Result<TimeDelta> {
    let out_of_range = || DurationError::OutOfRange(input.to_string());
    let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND)).map_err(|_| out_of_range())?;
    let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as u32;
    TimeDelta::new(secs, subsec).ok_or_else(out_of_range)
}

fn to_nanos(d: TimeDelta) -> i128 {
    i128::from(d.num_seconds()) * NANOS_PER_SECOND + i128::from(d.subsec_nanos())
}

/// Parses a duration such as `90s`, `1h30m`, `-2d` or `1.5 weeks`.
///
/// Whitespace is ignored and units are case insensitive. Supported units are
/// nanoseconds (`ns`), microseconds (`µs`, `us`), milliseconds (`ms`),
/// seconds (`s`), minutes (`m`), hours (`h`), days (`d`), weeks (`w`) and
/// 365 day years (`y`), each with its long forms.
///
/// ```rust
/// use chrono::TimeDelta;
/// use toolshed_common::parse_duration;
///
/// assert_eq!(parse_duration("1h 30m").unwrap(), TimeDelta::minutes(90));
/// assert_eq!(parse_duration("-1.5s").unwrap(), TimeDelta::milliseconds(-1500));
/// assert!(parse_duration("soon").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<TimeDelta> {
    let cleaned = clean(input);
    if !VALID.is_match(&cleaned) {
        return Err(DurationError::Invalid(input.to_string()));
    }

    let mut total: i128 = 0;
    for part in PART.captures_iter(&cleaned) {
        let (_, [number, unit]) = part.extract();
        let value: f64 = number.parse().map_err(|_| DurationError::InvalidNumber {
            number: number.to_string(),
            input: input.to_string(),
        })?;
        let per_unit = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;
        let nanos = value * per_unit as f64;
        // `as` saturates, so bounds are checked before the cast
        if !nanos.is_finite() || nanos >= i128::MAX as f64 {
            return Err(DurationError::OutOfRange(input.to_string()));
        }
        total = total
            .checked_add(nanos as i128)
            .ok_or_else(|| DurationError::OutOfRange(input.to_string()))?;
    }

    if cleaned.starts_with('-') {
        total = -total;
    }
    from_nanos(total, input)
}

/// Parses `input` like [`parse_duration`], but treats a bare number as a
/// count of `default_unit`.
///
/// ```rust
/// use chrono::TimeDelta;
/// use toolshed_common::parse_duration_with_default_unit;
///
/// assert_eq!(parse_duration_with_default_unit("30", "s").unwrap(), TimeDelta::seconds(30));
/// assert_eq!(parse_duration_with_default_unit("2m", "s").unwrap(), TimeDelta::minutes(2));
/// ```
pub fn parse_duration_with_default_unit(input: &str, default_unit: &str) -> Result<TimeDelta> {
    let cleaned = clean(input);
    if cleaned.parse::<f64>().is_ok() {
        parse_duration(&format!("{cleaned}{default_unit}"))
    } else {
        parse_duration(input)
    }
}

/// Formats `nanos` (under a second) with the largest fitting sub-second unit.
fn format_subsecond(nanos: i128) -> String {
    if nanos < NANOS_PER_MICRO {
        format!("{nanos}ns")
    } else if nanos < NANOS_PER_MILLI {
        format!("{}µs", decimal(nanos, NANOS_PER_MICRO, 3))
    } else {
        format!("{}ms", decimal(nanos, NANOS_PER_MILLI, 6))
    }
}

/// Renders `value / unit` with up to `digits` fractional digits, trailing
/// zeros removed.
fn decimal(value: i128, unit: i128, digits: usize) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:0digits$}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

/// Formats the part of a duration that is shorter than a day.
fn format_clock(nanos: i128) -> String {
    if nanos < NANOS_PER_SECOND {
        return format_subsecond(nanos);
    }
    let hours = nanos / NANOS_PER_HOUR;
    let minutes = (nanos % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
    let seconds = decimal(nanos % NANOS_PER_MINUTE, NANOS_PER_SECOND, 9);
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Formats a duration using the largest units first, in the syntax accepted
/// by [`parse_duration`].
///
/// Years, weeks and days are emitted as `y`, `w` and `d`; the rest is written
/// as hours, minutes and seconds (`1h0m0s`, `1m30s`, `1.5s`) or with a
/// sub-second unit (`500ms`, `3ns`).
///
/// ```rust
/// use chrono::TimeDelta;
/// use toolshed_common::format_duration;
///
/// let d = TimeDelta::hours(25) + TimeDelta::seconds(90);
/// assert_eq!(format_duration(d), "1d1h1m30s");
/// assert_eq!(format_duration(TimeDelta::zero()), "0s");
/// ```
pub fn format_duration(d: TimeDelta) -> String {
    let total = to_nanos(d);
    if total == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    if total < 0 {
        out.push('-');
    }
    let mut rest = total.abs();

    for (unit, suffix) in [
        (NANOS_PER_YEAR, 'y'),
        (NANOS_PER_WEEK, 'w'),
        (NANOS_PER_DAY, 'd'),
    ] {
        let count = rest / unit;
        rest %= unit;
        if count > 0 {
            out.push_str(&format!("{count}{suffix}"));
        }
    }

    if rest > 0 {
        out.push_str(&format_clock(rest));
    }
    out
}
