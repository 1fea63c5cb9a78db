//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an appointment with its full dependency chain.
///
/// This is a convenience method that creates:
/// 1. Clinic
/// 2. Doctor (open every day, 08:00 to 18:00 UTC)
/// 3. Patient
/// 4. Appointment (2026-03-04 at 09:00 UTC, a Wednesday)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((clinic, doctor, patient, appointment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::clinic::Model,
        entity::doctor::Model,
        entity::patient::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let clinic = crate::factory::clinic::create_clinic(db).await?;
    let doctor = crate::factory::doctor::create_doctor(db, clinic.id).await?;

    for weekday in 0..7 {
        crate::factory::doctor::create_business_hour(db, doctor.id, weekday, "08:00:00", "18:00:00")
            .await?;
    }

    let patient = crate::factory::patient::create_patient(db, clinic.id).await?;

    let date = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
    let appointment = crate::factory::appointment::create_appointment(
        db, clinic.id, patient.id, doctor.id, date,
    )
    .await?;

    Ok((clinic, doctor, patient, appointment))
}
