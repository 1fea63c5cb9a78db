use super::*;

/// Tests loading a patient by ID.
///
/// Expected: Ok with the patient
#[tokio::test]
async fn finds_patient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let repo = PatientRepository::new(db);
    let result = repo.get_by_id(clinic.id, patient.id).await;

    assert!(result.is_ok());
    let found = result.unwrap();
    assert_eq!(found.as_ref().map(|p| p.id), Some(patient.id));
    assert_eq!(found.map(|p| p.name), Some(patient.name));

    Ok(())
}

/// Tests loading a patient through the wrong clinic.
///
/// Verifies that a patient registered in one clinic is invisible when
/// requested under another clinic's ID.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_other_clinic() -> Result<(), DbErr> {
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
    let result = repo.get_by_id(other.id, patient.id).await?;

    assert!(result.is_none());

    Ok(())
}
