//! Wire encodings for time values carried inside payloads.
//!
//! Request durations use a fixed-width `DD.HH:MM:SS.ffff` timespan layout and
//! start times use RFC 3339 with up to nine fractional digits.

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta};

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;

/// Encode a duration as `DD.HH:MM:SS.ffff`.
///
/// Each component is reduced by subtracting the next-larger total rather than
/// by taking a remainder. For non-negative spans the two agree; negative spans
/// yield negative fields, each carrying its own sign. The trailing field is a
/// microsecond count and grows past four digits when it needs to.
pub fn format_duration(duration: TimeDelta) -> String {
    let nanos = total_nanos(&duration);

    let ref_hours = nanos / NANOS_PER_HOUR;
    let ref_minutes = nanos / NANOS_PER_MINUTE;
    let ref_seconds = nanos / NANOS_PER_SECOND;
    let ref_micros = nanos / NANOS_PER_MICRO;

    let days = ref_hours / 24;
    let hours = ref_hours - days * 24;
    let minutes = ref_minutes - ref_hours * 60;
    let seconds = ref_seconds - ref_minutes * 60;
    let subsecond = ref_micros - ref_seconds * 1_000_000;

    format!(
        "{:02}.{:02}:{:02}:{:02}.{:04}",
        days, hours, minutes, seconds, subsecond
    )
}

/// Render an instant as RFC 3339 with nanosecond precision.
///
/// Trailing zeros in the fraction are dropped, and the fraction disappears
/// entirely on a whole second. A zero offset is written as `Z`.
pub fn format_rfc3339_nano(instant: &DateTime<FixedOffset>) -> String {
    let full = instant.to_rfc3339_opts(SecondsFormat::Nanos, true);
    trim_fraction(&full)
}

fn trim_fraction(rendered: &str) -> String {
    // Fraction sits between the seconds field and the offset.
    let Some(dot) = rendered.find('.') else {
        return rendered.to_string();
    };
    let offset_start = rendered[dot + 1..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| dot + 1 + i)
        .unwrap_or(rendered.len());

    let digits = rendered[dot + 1..offset_start].trim_end_matches('0');
    let mut out = String::with_capacity(rendered.len());
    out.push_str(&rendered[..dot]);
    if !digits.is_empty() {
        out.push('.');
        out.push_str(digits);
    }
    out.push_str(&rendered[offset_start..]);
    out
}

fn total_nanos(duration: &TimeDelta) -> i128 {
    if let Some(nanos) = duration.num_nanoseconds() {
        return i128::from(nanos);
    }
    // Spans past roughly 292 years overflow i64 nanoseconds.
    let secs = duration.num_seconds();
    let rest = *duration - TimeDelta::seconds(secs);
    i128::from(secs) * NANOS_PER_SECOND + i128::from(rest.num_nanoseconds().unwrap_or(0))
}
