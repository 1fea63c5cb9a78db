//! Patient factory for creating test patient entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test patients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::patient::PatientFactory;
///
/// let patient = PatientFactory::new(&db, clinic.id)
///     .name("Ana Souza")
///     .email("ana@example.com")
///     .build()
///     .await?;
/// ```
pub struct PatientFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    name: String,
    email: String,
    phone_number: String,
    sex: String,
}

impl<'a> PatientFactory<'a> {
    /// Creates a new PatientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Patient {id}"` where id is auto-incremented
    /// - email: `"patient{id}@example.com"`
    /// - phone_number: `"11999990000"`
    /// - sex: `"female"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `clinic_id` - ID of the clinic the patient belongs to
    ///
    /// # Returns
    /// - `PatientFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, clinic_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            clinic_id,
            name: format!("Patient {}", id),
            email: format!("patient{}@example.com", id),
            phone_number: "11999990000".to_string(),
            sex: "female".to_string(),
        }
    }

    /// Sets the name for the patient.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email for the patient.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the phone number for the patient.
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Sets the registered sex for the patient.
    pub fn sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = sex.into();
        self
    }

    /// Builds and inserts the patient entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::patient::Model)` - Created patient entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::patient::Model, DbErr> {
        let now = Utc::now();
        entity::patient::ActiveModel {
            id: ActiveValue::NotSet,
            clinic_id: ActiveValue::Set(self.clinic_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(self.phone_number),
            sex: ActiveValue::Set(self.sex),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a patient with default values for the specified clinic.
///
/// # Arguments
/// - `db` - Database connection
/// - `clinic_id` - ID of the clinic the patient belongs to
///
/// # Returns
/// - `Ok(entity::patient::Model)` - Created patient entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_patient(
    db: &DatabaseConnection,
    clinic_id: i32,
) -> Result<entity::patient::Model, DbErr> {
    PatientFactory::new(db, clinic_id).build().await
}
