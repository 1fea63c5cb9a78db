//! Bookable slot computation for a doctor's day.
//!
//! Takes a normalized [`WeeklySchedule`], a target date, and the times already
//! taken on that date, and produces the remaining bookable slot start times.
//! The computation is pure; callers load the doctor and booked appointments
//! first and convert for display afterwards.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use dioxus_logger::tracing;

use crate::server::model::schedule::WeeklySchedule;

/// Minutes between consecutive bookable slot start times.
pub const SLOT_STRIDE_MINUTES: u32 = 30;

/// Computes the bookable slots for one doctor on one date.
///
/// Looks up the date's weekday in the schedule, generates candidate start
/// times at a 30-minute stride across the attendance window (end exclusive),
/// and drops candidates already booked. A booked candidate equal to `editing`
/// survives, so rescheduling an appointment keeps its current slot selectable.
///
/// A closed day yields no slots. A window whose end does not lie after its
/// start is a configuration mistake; it is logged and also yields no slots.
///
/// # Arguments
/// - `schedule` - The doctor's normalized weekly schedule
/// - `date` - Target calendar date
/// - `booked` - Slot start times (UTC) already taken on that date
/// - `editing` - Slot held by the appointment being rescheduled, if any
///
/// # Returns
/// - `Vec<NaiveTime>` - Remaining bookable start times in UTC, ascending
pub fn available_slots(
    schedule: &WeeklySchedule,
    date: NaiveDate,
    booked: &[NaiveTime],
    editing: Option<NaiveTime>,
) -> Vec<NaiveTime> {
    let hours = schedule.day(date.weekday().num_days_from_sunday());

    if !hours.enabled {
        return Vec::new();
    }

    let (Some(start), Some(end)) = (hours.start, hours.end) else {
        return Vec::new();
    };

    if end <= start {
        tracing::warn!(
            "Attendance window on {} ends at {} before it starts at {}",
            date,
            end,
            start
        );
        return Vec::new();
    }

    // Minutes from midnight keeps the stride walk free of midnight wraparound.
    let start_minutes = start.hour() * 60 + start.minute();
    let end_minutes = end.hour() * 60 + end.minute();

    (start_minutes..end_minutes)
        .step_by(SLOT_STRIDE_MINUTES as usize)
        .filter_map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0))
        .filter(|slot| !booked.contains(slot) || editing == Some(*slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::doctor::{BusinessHour, Doctor};
    use chrono::{TimeZone, Utc};

    /// A doctor open on every weekday with the given window.
    fn doctor_open_all_week(start_time: &str, end_time: &str) -> Doctor {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let business_hours = (0..7)
            .map(|weekday| BusinessHour {
                weekday,
                enabled: true,
                start_time: Some(start_time.to_string()),
                end_time: Some(end_time.to_string()),
            })
            .collect();

        Doctor {
            id: 1,
            clinic_id: 1,
            name: "Dr. Silva".to_string(),
            specialty: "Cardiology".to_string(),
            appointment_price_cents: 20_000,
            available_from_weekday: None,
            available_to_weekday: None,
            available_from_time: None,
            available_to_time: None,
            business_hours,
            created_at: now,
            updated_at: now,
        }
    }

    fn time(value: &str) -> NaiveTime {
        NaiveTime::parse_from_str(value, "%H:%M:%S").unwrap()
    }

    // 2026-03-04 is a Wednesday.
    fn target_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
    }

    #[test]
    fn closed_day_has_no_slots() {
        let schedule = WeeklySchedule::closed();

        let slots = available_slots(&schedule, target_date(), &[], None);

        assert!(slots.is_empty());
    }

    #[test]
    fn two_hour_window_yields_four_slots() {
        let doctor = doctor_open_all_week("08:00:00", "10:00:00");
        let schedule = WeeklySchedule::from_doctor(&doctor);

        let slots = available_slots(&schedule, target_date(), &[], None);

        assert_eq!(
            slots,
            vec![
                time("08:00:00"),
                time("08:30:00"),
                time("09:00:00"),
                time("09:30:00"),
            ]
        );
    }

    #[test]
    fn booked_slot_is_excluded() {
        let doctor = doctor_open_all_week("08:00:00", "10:00:00");
        let schedule = WeeklySchedule::from_doctor(&doctor);
        let booked = vec![time("08:30:00")];

        let slots = available_slots(&schedule, target_date(), &booked, None);

        assert_eq!(
            slots,
            vec![time("08:00:00"), time("09:00:00"), time("09:30:00")]
        );
    }

    #[test]
    fn edited_appointment_keeps_its_own_slot() {
        let doctor = doctor_open_all_week("08:00:00", "10:00:00");
        let schedule = WeeklySchedule::from_doctor(&doctor);
        let booked = vec![time("08:30:00"), time("09:00:00")];

        let slots = available_slots(&schedule, target_date(), &booked, Some(time("08:30:00")));

        // The edited appointment's slot stays selectable, other bookings do not.
        assert_eq!(
            slots,
            vec![time("08:00:00"), time("08:30:00"), time("09:30:00")]
        );
    }

    #[test]
    fn window_ending_before_start_is_empty() {
        let doctor = doctor_open_all_week("14:00:00", "10:00:00");
        let schedule = WeeklySchedule::from_doctor(&doctor);

        let slots = available_slots(&schedule, target_date(), &[], None);

        assert!(slots.is_empty());
    }

    #[test]
    fn window_with_equal_start_and_end_is_empty() {
        let doctor = doctor_open_all_week("10:00:00", "10:00:00");
        let schedule = WeeklySchedule::from_doctor(&doctor);

        let slots = available_slots(&schedule, target_date(), &[], None);

        assert!(slots.is_empty());
    }

    #[test]
    fn uneven_window_end_stays_exclusive() {
        let doctor = doctor_open_all_week("08:00:00", "09:15:00");
        let schedule = WeeklySchedule::from_doctor(&doctor);

        let slots = available_slots(&schedule, target_date(), &[], None);

        // 09:00 starts inside the window even though the full half hour does not fit.
        assert_eq!(
            slots,
            vec![time("08:00:00"), time("08:30:00"), time("09:00:00")]
        );
    }

    #[test]
    fn legacy_window_produces_slots_on_open_days_only() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let doctor = Doctor {
            id: 1,
            clinic_id: 1,
            name: "Dr. Silva".to_string(),
            specialty: "Cardiology".to_string(),
            appointment_price_cents: 20_000,
            available_from_weekday: Some(5),
            available_to_weekday: Some(1),
            available_from_time: Some("08:00:00".to_string()),
            available_to_time: Some("09:00:00".to_string()),
            business_hours: vec![],
            created_at: now,
            updated_at: now,
        };
        let schedule = WeeklySchedule::from_doctor(&doctor);

        // 2026-03-06 is a Friday, inside the Friday-to-Monday range.
        let friday = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
        assert_eq!(
            available_slots(&schedule, friday, &[], None),
            vec![time("08:00:00"), time("08:30:00")]
        );

        // 2026-03-04 is a Wednesday, outside the range.
        assert!(available_slots(&schedule, target_date(), &[], None).is_empty());
    }
}
