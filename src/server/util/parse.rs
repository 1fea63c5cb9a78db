use chrono::{NaiveDate, NaiveTime};

/// Parses a calendar date in "YYYY-MM-DD" form.
///
/// # Arguments
/// - `value` - The string to attempt to parse into a `NaiveDate`
///
/// # Returns
/// - `Some(NaiveDate)` - Successfully parsed
/// - `None` - The string is not a valid date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parses a time-of-day, accepting "HH:MM:SS" or the shorter "HH:MM".
///
/// Stored schedule times and slot values both use the full form, but the
/// parser is lenient because legacy rows were written by hand.
///
/// # Arguments
/// - `value` - The string to attempt to parse into a `NaiveTime`
///
/// # Returns
/// - `Some(NaiveTime)` - Successfully parsed
/// - `None` - The string matches neither format
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
}
