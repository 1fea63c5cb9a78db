use super::*;

/// Tests deleting a patient.
///
/// Expected: Ok(true) and the patient no longer found
#[tokio::test]
async fn deletes_patient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let repo = PatientRepository::new(db);
    let deleted = repo.delete(clinic.id, patient.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(clinic.id, patient.id).await?.is_none());

    Ok(())
}

/// Tests deleting a patient through the wrong clinic.
///
/// Expected: Ok(false) with the patient still present
#[tokio::test]
async fn returns_false_for_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let repo = PatientRepository::new(db);
    let deleted = repo.delete(other.id, patient.id).await?;

    assert!(!deleted);
    assert!(repo.get_by_id(clinic.id, patient.id).await?.is_some());

    Ok(())
}
