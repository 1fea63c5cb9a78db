//! Doctor factory for creating test doctor entities.
//!
//! This module provides factory methods for creating doctor entities and their
//! per-weekday business hour rows with sensible defaults. The factory supports
//! customization through a builder pattern, including the legacy weekday-range
//! availability fields for tests covering schedule normalization.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test doctors with customizable fields.
///
/// Provides a builder pattern for creating doctor entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::doctor::DoctorFactory;
///
/// let doctor = DoctorFactory::new(&db, clinic.id)
///     .name("Dr. Custom")
///     .specialty("Dermatology")
///     .appointment_price_cents(35_000)
///     .build()
///     .await?;
/// ```
pub struct DoctorFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    name: String,
    specialty: String,
    appointment_price_cents: i32,
    available_from_weekday: Option<i32>,
    available_to_weekday: Option<i32>,
    available_from_time: Option<String>,
    available_to_time: Option<String>,
}

impl<'a> DoctorFactory<'a> {
    /// Creates a new DoctorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Doctor {id}"` where id is auto-incremented
    /// - specialty: `"General"`
    /// - appointment_price_cents: 20000
    /// - legacy availability fields: all `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `clinic_id` - ID of the clinic the doctor belongs to
    ///
    /// # Returns
    /// - `DoctorFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, clinic_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            clinic_id,
            name: format!("Doctor {}", id),
            specialty: "General".to_string(),
            appointment_price_cents: 20_000,
            available_from_weekday: None,
            available_to_weekday: None,
            available_from_time: None,
            available_to_time: None,
        }
    }

    /// Sets the name for the doctor.
    ///
    /// # Arguments
    /// - `name` - Display name for the doctor
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the specialty for the doctor.
    ///
    /// # Arguments
    /// - `specialty` - Medical specialty shown in listings
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    /// Sets the default appointment price for the doctor.
    ///
    /// # Arguments
    /// - `appointment_price_cents` - Price in cents
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn appointment_price_cents(mut self, appointment_price_cents: i32) -> Self {
        self.appointment_price_cents = appointment_price_cents;
        self
    }

    /// Sets the legacy weekday-range availability window.
    ///
    /// Used by tests covering normalization of doctors created before the
    /// business hour table existed.
    ///
    /// # Arguments
    /// - `from_weekday` - First attended weekday (0 = Sunday)
    /// - `to_weekday` - Last attended weekday, inclusive
    /// - `from_time` - Daily opening time as "HH:MM:SS" in UTC
    /// - `to_time` - Daily closing time as "HH:MM:SS" in UTC
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn legacy_window(
        mut self,
        from_weekday: i32,
        to_weekday: i32,
        from_time: impl Into<String>,
        to_time: impl Into<String>,
    ) -> Self {
        self.available_from_weekday = Some(from_weekday);
        self.available_to_weekday = Some(to_weekday);
        self.available_from_time = Some(from_time.into());
        self.available_to_time = Some(to_time.into());
        self
    }

    /// Builds and inserts the doctor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::doctor::Model)` - Created doctor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::doctor::Model, DbErr> {
        let now = Utc::now();
        entity::doctor::ActiveModel {
            id: ActiveValue::NotSet,
            clinic_id: ActiveValue::Set(self.clinic_id),
            name: ActiveValue::Set(self.name),
            specialty: ActiveValue::Set(self.specialty),
            appointment_price_cents: ActiveValue::Set(self.appointment_price_cents),
            available_from_weekday: ActiveValue::Set(self.available_from_weekday),
            available_to_weekday: ActiveValue::Set(self.available_to_weekday),
            available_from_time: ActiveValue::Set(self.available_from_time),
            available_to_time: ActiveValue::Set(self.available_to_time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a doctor with default values for the specified clinic.
///
/// Shorthand for `DoctorFactory::new(db, clinic_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `clinic_id` - ID of the clinic the doctor belongs to
///
/// # Returns
/// - `Ok(entity::doctor::Model)` - Created doctor entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let doctor = create_doctor(&db, clinic.id).await?;
/// ```
pub async fn create_doctor(
    db: &DatabaseConnection,
    clinic_id: i32,
) -> Result<entity::doctor::Model, DbErr> {
    DoctorFactory::new(db, clinic_id).build().await
}

/// Creates an enabled business hour row for a doctor.
///
/// # Arguments
/// - `db` - Database connection
/// - `doctor_id` - ID of the doctor the row belongs to
/// - `weekday` - Weekday the row applies to (0 = Sunday, 6 = Saturday)
/// - `start_time` - Opening time as "HH:MM:SS" in UTC
/// - `end_time` - Closing time as "HH:MM:SS" in UTC
///
/// # Returns
/// - `Ok(entity::doctor_business_hour::Model)` - Created business hour row
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let hour = create_business_hour(&db, doctor.id, 1, "08:00:00", "12:00:00").await?;
/// ```
pub async fn create_business_hour(
    db: &DatabaseConnection,
    doctor_id: i32,
    weekday: i32,
    start_time: impl Into<String>,
    end_time: impl Into<String>,
) -> Result<entity::doctor_business_hour::Model, DbErr> {
    entity::doctor_business_hour::ActiveModel {
        id: ActiveValue::NotSet,
        doctor_id: ActiveValue::Set(doctor_id),
        weekday: ActiveValue::Set(weekday),
        enabled: ActiveValue::Set(true),
        start_time: ActiveValue::Set(Some(start_time.into())),
        end_time: ActiveValue::Set(Some(end_time.into())),
    }
    .insert(db)
    .await
}
