use super::*;

/// Tests deleting a record.
///
/// Expected: Ok(true) and the record is gone
#[tokio::test]
async fn deletes_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .with_table(entity::prelude::MedicalRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let created = factory::create_medical_record(db, clinic.id, patient.id, "Old note").await?;

    let repo = MedicalRecordRepository::new(db);
    let deleted = repo.delete(clinic.id, created.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(clinic.id, created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a record through the wrong clinic.
///
/// Expected: Ok(false) and the record survives
#[tokio::test]
async fn returns_false_for_other_clinic() -> Result<(), DbErr> {
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
    let created = factory::create_medical_record(db, clinic.id, patient.id, "Old note").await?;

    let repo = MedicalRecordRepository::new(db);
    let deleted = repo.delete(other.id, created.id).await?;

    assert!(!deleted);
    assert!(repo.get_by_id(clinic.id, created.id).await?.is_some());

    Ok(())
}
