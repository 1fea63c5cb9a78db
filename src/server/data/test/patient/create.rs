use super::*;

/// Tests registering a new patient.
///
/// Verifies that the patient is stored with all contact details under the
/// given clinic.
///
/// Expected: Ok with the patient created
#[tokio::test]
async fn registers_patient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = PatientRepository::new(db);
    let result = repo
        .create(CreatePatientParam {
            clinic_id: clinic.id,
            name: "Maria Souza".to_string(),
            email: "maria@example.com".to_string(),
            phone_number: "+55 11 91234-5678".to_string(),
            sex: "female".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let patient = result.unwrap();
    assert_eq!(patient.clinic_id, clinic.id);
    assert_eq!(patient.name, "Maria Souza");
    assert_eq!(patient.email, "maria@example.com");
    assert_eq!(patient.phone_number, "+55 11 91234-5678");
    assert_eq!(patient.sex, "female");

    Ok(())
}
