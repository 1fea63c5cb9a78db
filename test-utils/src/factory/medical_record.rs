//! Medical record factory for creating test record entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a medical record for a patient with the given content.
///
/// The record is not tied to an appointment; pass the returned model through
/// an update if a test needs the optional appointment link.
///
/// # Arguments
/// - `db` - Database connection
/// - `clinic_id` - ID of the clinic the record belongs to
/// - `patient_id` - ID of the patient the record describes
/// - `content` - Markdown body of the record
///
/// # Returns
/// - `Ok(entity::medical_record::Model)` - Created medical record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_medical_record(
    db: &DatabaseConnection,
    clinic_id: i32,
    patient_id: i32,
    content: impl Into<String>,
) -> Result<entity::medical_record::Model, DbErr> {
    let now = Utc::now();
    entity::medical_record::ActiveModel {
        id: ActiveValue::NotSet,
        clinic_id: ActiveValue::Set(clinic_id),
        patient_id: ActiveValue::Set(patient_id),
        appointment_id: ActiveValue::Set(None),
        content: ActiveValue::Set(content.into()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
