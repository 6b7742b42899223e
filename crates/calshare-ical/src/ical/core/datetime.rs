//! UTC date-time encoding (RFC 5545 §3.3.5, form #2).

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

/// `chrono` format string for `YYYYMMDDTHHMMSSZ`.
pub const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Formats an instant as an iCalendar UTC date-time, e.g. `20141120T120000Z`.
#[must_use]
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format(DATE_TIME_FORMAT).to_string()
}

/// Parses an iCalendar UTC date-time back into an instant.
#[must_use]
pub fn parse_utc(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text.trim(), DATE_TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Formats epoch milliseconds observed in `zone` as a UTC date-time.
///
/// Returns `None` for negative or out-of-range milliseconds. An unknown zone id falls
/// back to UTC.
#[must_use]
pub fn format_utc_date_time(millis: i64, zone: &str) -> Option<String> {
    if millis < 0 {
        return None;
    }

    let tz = resolve_zone(zone);
    let local = tz.timestamp_millis_opt(millis).single()?;
    tracing::trace!(%local, zone = %tz, "Converting event time to UTC");

    Some(format_utc(&local.with_timezone(&Utc)))
}

/// Shifts wall-clock milliseconds in `zone` to UTC by removing the zone's standard
/// (non-daylight) offset. Negative input yields 0.
#[must_use]
pub fn local_millis_to_utc(millis: i64, zone: &str) -> i64 {
    if millis < 0 {
        return 0;
    }

    let tz = resolve_zone(zone);
    DateTime::from_timestamp_millis(millis).map_or(millis, |instant| {
        let offset = tz.offset_from_utc_datetime(&instant.naive_utc());
        millis - offset.base_utc_offset().num_milliseconds()
    })
}

fn resolve_zone(zone: &str) -> Tz {
    zone.parse::<Tz>().unwrap_or_else(|_| {
        tracing::warn!(zone, "Unknown time zone id, using UTC");
        Tz::UTC
    })
}
