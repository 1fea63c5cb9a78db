//! Weekly schedule normalization for doctor availability.
//!
//! Doctors store their attendance in one of two shapes: per-weekday business hour
//! rows, or a legacy weekday-range window (first to last attended weekday plus a
//! single daily time window). [`WeeklySchedule`] normalizes both into seven
//! [`DayHours`] entries so slot computation never has to know which shape a
//! doctor was stored in. When a doctor has any business hour rows, those rows win
//! and the legacy fields are ignored.

use chrono::NaiveTime;
use dioxus_logger::tracing;

use crate::server::{model::doctor::Doctor, util::parse::parse_time_of_day};

/// Attendance window for a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    /// Whether the doctor attends on this weekday.
    pub enabled: bool,
    /// Opening time in UTC, None when closed.
    pub start: Option<NaiveTime>,
    /// Closing time in UTC, exclusive, None when closed.
    pub end: Option<NaiveTime>,
}

impl DayHours {
    /// A day with no attendance.
    pub fn closed() -> Self {
        Self {
            enabled: false,
            start: None,
            end: None,
        }
    }
}

/// A doctor's full week of attendance windows, indexed by weekday.
///
/// Index 0 is Sunday through 6 for Saturday, matching how weekdays are stored
/// on business hour rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [DayHours; 7],
}

impl WeeklySchedule {
    /// A schedule with every day closed.
    pub fn closed() -> Self {
        Self {
            days: [DayHours::closed(); 7],
        }
    }

    /// Returns the attendance window for a weekday (0 = Sunday, 6 = Saturday).
    pub fn day(&self, weekday: u32) -> DayHours {
        self.days[(weekday % 7) as usize]
    }

    /// Normalizes a doctor's stored availability into a weekly schedule.
    ///
    /// Business hour rows take precedence; the legacy weekday-range window is
    /// only consulted when the doctor has no rows at all. Malformed data never
    /// fails the conversion: a row or window that cannot be understood is
    /// logged and treated as closed.
    pub fn from_doctor(doctor: &Doctor) -> Self {
        if doctor.business_hours.is_empty() {
            Self::from_legacy_window(
                doctor.id,
                doctor.available_from_weekday,
                doctor.available_to_weekday,
                doctor.available_from_time.as_deref(),
                doctor.available_to_time.as_deref(),
            )
        } else {
            let mut schedule = Self::closed();

            for hour in &doctor.business_hours {
                if !(0..7).contains(&hour.weekday) {
                    tracing::warn!(
                        "Ignoring schedule row with weekday {} for doctor {}",
                        hour.weekday,
                        doctor.id
                    );
                    continue;
                }

                if !hour.enabled {
                    continue;
                }

                let start = hour.start_time.as_deref().and_then(parse_time_of_day);
                let end = hour.end_time.as_deref().and_then(parse_time_of_day);

                match (start, end) {
                    (Some(start), Some(end)) => {
                        schedule.days[hour.weekday as usize] = DayHours {
                            enabled: true,
                            start: Some(start),
                            end: Some(end),
                        };
                    }
                    _ => {
                        tracing::warn!(
                            "Treating weekday {} as closed for doctor {}: unreadable times {:?}/{:?}",
                            hour.weekday,
                            doctor.id,
                            hour.start_time,
                            hour.end_time
                        );
                    }
                }
            }

            schedule
        }
    }

    /// Builds a schedule from the legacy weekday-range window.
    ///
    /// The range is inclusive on both ends and wraps past Saturday, so a window
    /// of Friday through Monday opens Friday, Saturday, Sunday, and Monday. A
    /// window missing either weekday is simply a doctor with no schedule;
    /// unreadable weekdays or times are logged and yield a closed week.
    fn from_legacy_window(
        doctor_id: i32,
        from_weekday: Option<i32>,
        to_weekday: Option<i32>,
        from_time: Option<&str>,
        to_time: Option<&str>,
    ) -> Self {
        let (Some(from_weekday), Some(to_weekday)) = (from_weekday, to_weekday) else {
            return Self::closed();
        };

        if !(0..7).contains(&from_weekday) || !(0..7).contains(&to_weekday) {
            tracing::warn!(
                "Treating doctor {} as closed: legacy weekday range {}..{} out of bounds",
                doctor_id,
                from_weekday,
                to_weekday
            );
            return Self::closed();
        }

        let start = from_time.and_then(parse_time_of_day);
        let end = to_time.and_then(parse_time_of_day);

        let (Some(start), Some(end)) = (start, end) else {
            tracing::warn!(
                "Treating doctor {} as closed: unreadable legacy times {:?}/{:?}",
                doctor_id,
                from_time,
                to_time
            );
            return Self::closed();
        };

        let mut schedule = Self::closed();
        let mut weekday = from_weekday as usize;

        loop {
            schedule.days[weekday] = DayHours {
                enabled: true,
                start: Some(start),
                end: Some(end),
            };

            if weekday == to_weekday as usize {
                break;
            }

            weekday = (weekday + 1) % 7;
        }

        schedule
    }
}
