use super::*;

/// Tests finding appointments due for a reminder email.
///
/// Verifies that only unstamped appointments starting inside the window
/// are returned, soonest first.
///
/// Expected: Ok with the due appointments in date order
#[tokio::test]
async fn finds_unstamped_appointments_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let from = Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap();
    let until = from + Duration::hours(24);

    // Before the window.
    factory::create_appointment(db, clinic.id, patient.id, doctor.id, from - Duration::hours(1))
        .await?;
    let soon = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        from + Duration::hours(2),
    )
    .await?;
    let later = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        from + Duration::hours(20),
    )
    .await?;
    // At the exclusive end of the window.
    factory::create_appointment(db, clinic.id, patient.id, doctor.id, until).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo.get_due_for_reminder(from, until).await;

    assert!(result.is_ok());
    let due = result.unwrap();
    assert_eq!(due.len(), 2);
    assert_eq!(due[0].id, soon.id);
    assert_eq!(due[1].id, later.id);

    Ok(())
}

/// Tests that appointments already reminded are skipped.
///
/// Expected: Ok without the stamped appointment
#[tokio::test]
async fn excludes_stamped_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let from = Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap();
    let until = from + Duration::hours(24);

    factory::appointment::AppointmentFactory::new(db, clinic.id, patient.id, doctor.id)
        .date(from + Duration::hours(3))
        .reminder_sent_at(from - Duration::hours(1))
        .build()
        .await?;
    let due = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        from + Duration::hours(5),
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let found = repo.get_due_for_reminder(from, until).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, due.id);

    Ok(())
}

/// Tests stamping the reminder timestamp.
///
/// Verifies that a stamped appointment stops being due on the next pass.
///
/// Expected: Ok with the appointment absent after the stamp
#[tokio::test]
async fn stamp_removes_appointment_from_due_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let from = Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap();
    let until = from + Duration::hours(24);
    let appointment = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        from + Duration::hours(6),
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    assert_eq!(repo.get_due_for_reminder(from, until).await?.len(), 1);

    repo.stamp_reminder_sent(appointment.id).await?;

    assert!(repo.get_due_for_reminder(from, until).await?.is_empty());
    let stamped = repo.get_row_by_id(clinic.id, appointment.id).await?.unwrap();
    assert!(stamped.reminder_sent_at.is_some());

    Ok(())
}
