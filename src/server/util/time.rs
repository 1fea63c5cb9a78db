//! Timezone conversion and display formatting.
//!
//! All timestamps are stored in UTC. Everything the user sees is rendered in
//! the clinic's wall-clock timezone, a fixed UTC-3 offset with no daylight
//! saving handling.

use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, Utc};

/// Fixed display offset relative to UTC, in hours.
pub const LOCAL_OFFSET_HOURS: i64 = -3;

/// Converts a UTC time-of-day to the local wall-clock time-of-day.
///
/// Wraps around midnight, so 01:00 UTC becomes 22:00 local.
pub fn utc_time_to_local(time: NaiveTime) -> NaiveTime {
    time + Duration::hours(LOCAL_OFFSET_HOURS)
}

/// Converts a local wall-clock time-of-day to the UTC time-of-day.
pub fn local_time_to_utc(time: NaiveTime) -> NaiveTime {
    time - Duration::hours(LOCAL_OFFSET_HOURS)
}

/// Converts a UTC instant to the local wall-clock date and time.
pub fn utc_to_local(instant: DateTime<Utc>) -> NaiveDateTime {
    (instant + Duration::hours(LOCAL_OFFSET_HOURS)).naive_utc()
}

/// Converts a local wall-clock date and time to the UTC instant.
pub fn local_to_utc(wall_clock: NaiveDateTime) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(wall_clock - Duration::hours(LOCAL_OFFSET_HOURS), Utc)
}

/// Formats a UTC time-of-day as local "HH:MM".
pub fn format_time_local(time: NaiveTime) -> String {
    utc_time_to_local(time).format("%H:%M").to_string()
}

/// Formats a UTC instant as local "DD/MM/YYYY HH:MM".
pub fn format_datetime_local(instant: DateTime<Utc>) -> String {
    utc_to_local(instant).format("%d/%m/%Y %H:%M").to_string()
}

/// Formats a UTC instant as the local calendar date "YYYY-MM-DD".
///
/// Used to bucket revenue by the day the clinic actually experienced, not the
/// UTC day.
pub fn local_date_string(instant: DateTime<Utc>) -> String {
    utc_to_local(instant).format("%Y-%m-%d").to_string()
}
