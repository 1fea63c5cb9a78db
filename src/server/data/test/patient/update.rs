use super::*;

/// Tests updating a patient's details.
///
/// Expected: Ok with all contact fields rewritten
#[tokio::test]
async fn updates_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let repo = PatientRepository::new(db);
    let result = repo
        .update(UpdatePatientParam {
            clinic_id: clinic.id,
            patient_id: patient.id,
            name: "Renamed Patient".to_string(),
            email: "renamed@example.com".to_string(),
            phone_number: "+55 11 98888-0000".to_string(),
            sex: "other".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap().unwrap();
    assert_eq!(updated.name, "Renamed Patient");
    assert_eq!(updated.email, "renamed@example.com");
    assert_eq!(updated.phone_number, "+55 11 98888-0000");
    assert_eq!(updated.sex, "other");

    Ok(())
}

/// Tests updating a patient through the wrong clinic.
///
/// Verifies that the update misses and the stored details survive.
///
/// Expected: Ok with None and the original row preserved
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
    let result = repo
        .update(UpdatePatientParam {
            clinic_id: other.id,
            patient_id: patient.id,
            name: "Hijacked".to_string(),
            email: "hijacked@example.com".to_string(),
            phone_number: String::new(),
            sex: "other".to_string(),
        })
        .await?;

    assert!(result.is_none());

    let untouched = repo.get_by_id(clinic.id, patient.id).await?.unwrap();
    assert_eq!(untouched.name, patient.name);

    Ok(())
}
