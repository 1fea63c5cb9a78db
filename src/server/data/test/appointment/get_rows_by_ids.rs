use super::*;

/// Tests resolving a batch of appointments by ID within a clinic.
///
/// Verifies that only IDs belonging to the clinic resolve, so reporting
/// cannot pull another clinic's appointments through transaction links.
///
/// Expected: Ok with the clinic's matching rows only
#[tokio::test]
async fn resolves_only_clinic_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let other_doctor = factory::create_doctor(db, other.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let other_patient = factory::create_patient(db, other.id).await?;

    let mine = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap(),
    )
    .await?;
    let foreign = factory::create_appointment(
        db,
        other.id,
        other_patient.id,
        other_doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap(),
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let result = repo.get_rows_by_ids(clinic.id, vec![mine.id, foreign.id]).await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, mine.id);

    Ok(())
}

/// Tests resolving an empty ID set.
///
/// Expected: Ok with an empty list and no query issued
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = AppointmentRepository::new(db);
    let rows = repo.get_rows_by_ids(clinic.id, Vec::new()).await?;

    assert!(rows.is_empty());

    Ok(())
}
