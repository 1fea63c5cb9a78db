use super::*;

/// Tests reading a clinic's appointments inside a time range.
///
/// Verifies the inclusive start, exclusive end, clinic scoping, and the
/// oldest-first ordering the revenue report aggregates over.
///
/// Expected: Ok with only the clinic's in-range rows, oldest first
#[tokio::test]
async fn returns_clinic_rows_inside_range() -> Result<(), DbErr> {
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

    let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();

    let second = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap(),
    )
    .await?;
    let first = factory::create_appointment(db, clinic.id, patient.id, doctor.id, start).await?;
    // Outside the range and outside the clinic.
    factory::create_appointment(db, clinic.id, patient.id, doctor.id, end).await?;
    factory::create_appointment(
        db,
        other.id,
        other_patient.id,
        other_doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap(),
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let result = repo.get_all_in_range(clinic.id, start, end).await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, first.id);
    assert_eq!(rows[1].id, second.id);

    Ok(())
}
