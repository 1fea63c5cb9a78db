use super::*;

/// Tests writing a standalone medical record.
///
/// Expected: Ok with the record stored and no appointment link
#[tokio::test]
async fn writes_standalone_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .with_table(entity::prelude::MedicalRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let repo = MedicalRecordRepository::new(db);
    let result = repo
        .create(CreateMedicalRecordParam {
            clinic_id: clinic.id,
            patient_id: patient.id,
            appointment_id: None,
            content: "# First visit\n\nPatient reports mild symptoms.".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let record = result.unwrap();
    assert_eq!(record.clinic_id, clinic.id);
    assert_eq!(record.patient_id, patient.id);
    assert!(record.appointment_id.is_none());
    assert!(record.content.starts_with("# First visit"));

    Ok(())
}

/// Tests writing a record attached to an appointment.
///
/// Expected: Ok with the appointment link stored
#[tokio::test]
async fn links_record_to_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .with_table(entity::prelude::MedicalRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, patient, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = MedicalRecordRepository::new(db);
    let record = repo
        .create(CreateMedicalRecordParam {
            clinic_id: clinic.id,
            patient_id: patient.id,
            appointment_id: Some(appointment.id),
            content: "Follow-up notes.".to_string(),
        })
        .await?;

    assert_eq!(record.appointment_id, Some(appointment.id));

    Ok(())
}
