//! Cron jobs for automated background tasks.

pub mod appointment_reminders;
