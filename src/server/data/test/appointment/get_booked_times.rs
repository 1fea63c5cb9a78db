use super::*;

/// Tests reading a doctor's occupied slots inside a range.
///
/// Verifies that the range start is inclusive, the end exclusive, and that
/// each slot comes back with its appointment ID so an edited appointment
/// can be exempted from the conflict check.
///
/// Expected: Ok with the bookings inside the range, soonest first
#[tokio::test]
async fn returns_bookings_inside_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let start = Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();

    let at_start = factory::create_appointment(db, clinic.id, patient.id, doctor.id, start).await?;
    let inside = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap(),
    )
    .await?;
    // At the exclusive end bound, must not be returned.
    factory::create_appointment(db, clinic.id, patient.id, doctor.id, end).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo.get_booked_times(doctor.id, start, end).await;

    assert!(result.is_ok());
    let booked = result.unwrap();
    assert_eq!(booked.len(), 2);
    assert_eq!(booked[0], (at_start.id, at_start.date));
    assert_eq!(booked[1], (inside.id, inside.date));

    Ok(())
}

/// Tests that the occupied slots only cover the requested doctor.
///
/// Expected: Ok with the other doctor's bookings excluded
#[tokio::test]
async fn scopes_bookings_to_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor_a = factory::create_doctor(db, clinic.id).await?;
    let doctor_b = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let slot = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
    let mine = factory::create_appointment(db, clinic.id, patient.id, doctor_a.id, slot).await?;
    factory::create_appointment(db, clinic.id, patient.id, doctor_b.id, slot).await?;

    let repo = AppointmentRepository::new(db);
    let booked = repo
        .get_booked_times(
            doctor_a.id,
            Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap(),
        )
        .await?;

    assert_eq!(booked.len(), 1);
    assert_eq!(booked[0].0, mine.id);

    Ok(())
}
