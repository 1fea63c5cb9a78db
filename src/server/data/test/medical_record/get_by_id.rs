use super::*;

/// Tests fetching a single record.
///
/// Expected: Ok with Some carrying the stored content
#[tokio::test]
async fn finds_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .with_table(entity::prelude::MedicalRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let created = factory::create_medical_record(db, clinic.id, patient.id, "Annual checkup").await?;

    let repo = MedicalRecordRepository::new(db);
    let result = repo.get_by_id(clinic.id, created.id).await;

    assert!(result.is_ok());
    let record = result.unwrap();
    assert!(record.is_some());
    let record = record.unwrap();
    assert_eq!(record.patient_id, patient.id);
    assert_eq!(record.content, "Annual checkup");

    Ok(())
}

/// Tests fetching a record through the wrong clinic.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_other_clinic() -> Result<(), DbErr> {
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
    let created = factory::create_medical_record(db, clinic.id, patient.id, "Annual checkup").await?;

    let repo = MedicalRecordRepository::new(db);
    let record = repo.get_by_id(other.id, created.id).await?;

    assert!(record.is_none());

    Ok(())
}
