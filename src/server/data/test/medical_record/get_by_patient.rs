use super::*;

/// Helper function to write a record at a fixed instant
async fn create_record_at(
    db: &DatabaseConnection,
    clinic_id: i32,
    patient_id: i32,
    content: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::medical_record::Model, DbErr> {
    entity::medical_record::ActiveModel {
        id: ActiveValue::NotSet,
        clinic_id: ActiveValue::Set(clinic_id),
        patient_id: ActiveValue::Set(patient_id),
        appointment_id: ActiveValue::Set(None),
        content: ActiveValue::Set(content.to_string()),
        created_at: ActiveValue::Set(created_at),
        updated_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await
}

/// Tests reading a patient's history newest first.
///
/// Expected: Ok with the most recent record at the top
#[tokio::test]
async fn returns_history_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .with_table(entity::prelude::MedicalRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let base = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
    create_record_at(db, clinic.id, patient.id, "First visit", base).await?;
    create_record_at(
        db,
        clinic.id,
        patient.id,
        "Second visit",
        Utc.with_ymd_and_hms(2026, 3, 8, 10, 0, 0).unwrap(),
    )
    .await?;

    let repo = MedicalRecordRepository::new(db);
    let result = repo.get_by_patient(clinic.id, patient.id).await;

    assert!(result.is_ok());
    let records = result.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].content, "Second visit");
    assert_eq!(records[1].content, "First visit");

    Ok(())
}

/// Tests that a patient's history never includes other patients.
///
/// Expected: Ok with only the requested patient's records
#[tokio::test]
async fn scopes_history_to_patient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .with_table(entity::prelude::MedicalRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let other = factory::create_patient(db, clinic.id).await?;
    factory::create_medical_record(db, clinic.id, patient.id, "Mine").await?;
    factory::create_medical_record(db, clinic.id, other.id, "Theirs").await?;

    let repo = MedicalRecordRepository::new(db);
    let records = repo.get_by_patient(clinic.id, patient.id).await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content, "Mine");

    Ok(())
}

/// Tests reading a history through the wrong clinic.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .with_table(entity::prelude::MedicalRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    factory::create_medical_record(db, clinic.id, patient.id, "Private").await?;

    let repo = MedicalRecordRepository::new(db);
    let records = repo.get_by_patient(other.id, patient.id).await?;

    assert!(records.is_empty());

    Ok(())
}
