use super::*;

/// Tests rewriting a record's content.
///
/// Expected: Ok with Some carrying the new content
#[tokio::test]
async fn replaces_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .with_table(entity::prelude::MedicalRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let created = factory::create_medical_record(db, clinic.id, patient.id, "Draft note").await?;

    let repo = MedicalRecordRepository::new(db);
    let result = repo
        .update(UpdateMedicalRecordParam {
            clinic_id: clinic.id,
            record_id: created.id,
            content: "Final note".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.content, "Final note");
    assert!(updated.updated_at >= updated.created_at);

    Ok(())
}

/// Tests updating a record through the wrong clinic.
///
/// Expected: Ok with None and the content untouched
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
    let created = factory::create_medical_record(db, clinic.id, patient.id, "Draft note").await?;

    let repo = MedicalRecordRepository::new(db);
    let updated = repo
        .update(UpdateMedicalRecordParam {
            clinic_id: other.id,
            record_id: created.id,
            content: "Hijacked".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    let record = repo.get_by_id(clinic.id, created.id).await?.unwrap();
    assert_eq!(record.content, "Draft note");

    Ok(())
}
