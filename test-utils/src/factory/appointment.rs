//! Appointment factory for creating test appointment entities.
//!
//! Appointments reference a clinic, a patient, and a doctor, so callers must
//! seed those rows first. The `create_appointment_with_dependencies` helper in
//! the helpers module does all of that in one call when the related rows do
//! not matter to the test.

use crate::factory::helpers::next_id;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::appointment::AppointmentFactory;
///
/// let appointment = AppointmentFactory::new(&db, clinic.id, patient.id, doctor.id)
///     .date(Utc.with_ymd_and_hms(2026, 3, 4, 14, 0, 0).unwrap())
///     .price_cents(25_000)
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    patient_id: i32,
    doctor_id: i32,
    health_insurance_plan_id: Option<i32>,
    date: DateTime<Utc>,
    price_cents: i32,
    reminder_sent_at: Option<DateTime<Utc>>,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - health_insurance_plan_id: `None` (private appointment)
    /// - date: a weekday morning slot offset by the shared counter so
    ///   successive appointments never collide on the same doctor and time
    /// - price_cents: 20000
    /// - reminder_sent_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `clinic_id` - ID of the clinic the appointment belongs to
    /// - `patient_id` - ID of the booked patient
    /// - `doctor_id` - ID of the attending doctor
    ///
    /// # Returns
    /// - `AppointmentFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        clinic_id: i32,
        patient_id: i32,
        doctor_id: i32,
    ) -> Self {
        let id = next_id() as u32;
        // Spread default dates across half-hour slots so two factory
        // appointments for the same doctor never share a time.
        let minute = if id % 2 == 0 { 0 } else { 30 };
        let hour = 8 + (id / 2) % 10;
        let date = Utc
            .with_ymd_and_hms(2026, 3, 4, hour, minute, 0)
            .single()
            .unwrap_or_else(Utc::now);

        Self {
            db,
            clinic_id,
            patient_id,
            doctor_id,
            health_insurance_plan_id: None,
            date,
            price_cents: 20_000,
            reminder_sent_at: None,
        }
    }

    /// Sets the health insurance plan covering the appointment.
    pub fn health_insurance_plan_id(mut self, plan_id: i32) -> Self {
        self.health_insurance_plan_id = Some(plan_id);
        self
    }

    /// Sets the scheduled date and time in UTC.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the charged price for the appointment.
    pub fn price_cents(mut self, price_cents: i32) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Marks the reminder email as already sent at the given time.
    pub fn reminder_sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.reminder_sent_at = Some(sent_at);
        self
    }

    /// Builds and inserts the appointment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        entity::appointment::ActiveModel {
            id: ActiveValue::NotSet,
            clinic_id: ActiveValue::Set(self.clinic_id),
            patient_id: ActiveValue::Set(self.patient_id),
            doctor_id: ActiveValue::Set(self.doctor_id),
            health_insurance_plan_id: ActiveValue::Set(self.health_insurance_plan_id),
            date: ActiveValue::Set(self.date),
            price_cents: ActiveValue::Set(self.price_cents),
            reminder_sent_at: ActiveValue::Set(self.reminder_sent_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an appointment at the given date for already-seeded rows.
///
/// # Arguments
/// - `db` - Database connection
/// - `clinic_id` - ID of the clinic the appointment belongs to
/// - `patient_id` - ID of the booked patient
/// - `doctor_id` - ID of the attending doctor
/// - `date` - Scheduled date and time in UTC
///
/// # Returns
/// - `Ok(entity::appointment::Model)` - Created appointment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_appointment(
    db: &DatabaseConnection,
    clinic_id: i32,
    patient_id: i32,
    doctor_id: i32,
    date: DateTime<Utc>,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, clinic_id, patient_id, doctor_id)
        .date(date)
        .build()
        .await
}
