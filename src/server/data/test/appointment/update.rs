use super::*;

/// Tests rescheduling an appointment.
///
/// Verifies that the slot, people, plan, and price are rewritten and that
/// asking for a reminder reset clears the sent stamp so the scheduler
/// notifies the patient about the new time.
///
/// Expected: Ok with the new values stored and the stamp cleared
#[tokio::test]
async fn reschedules_and_clears_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let appointment = factory::appointment::AppointmentFactory::new(db, clinic.id, patient.id, doctor.id)
        .date(Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap())
        .reminder_sent_at(Utc.with_ymd_and_hms(2026, 3, 3, 9, 0, 0).unwrap())
        .build()
        .await?;

    let new_date = Utc.with_ymd_and_hms(2026, 3, 6, 14, 0, 0).unwrap();

    let repo = AppointmentRepository::new(db);
    let result = repo
        .update(
            clinic.id,
            appointment.id,
            patient.id,
            doctor.id,
            None,
            new_date,
            27_000,
            true,
        )
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap().unwrap();
    assert_eq!(updated.date, new_date);
    assert_eq!(updated.price_cents, 27_000);
    assert!(updated.reminder_sent_at.is_none());

    Ok(())
}

/// Tests updating an appointment without touching the reminder.
///
/// Verifies that an edit that keeps the slot leaves the sent stamp alone
/// so no second reminder goes out.
///
/// Expected: Ok with the stamp preserved
#[tokio::test]
async fn keeps_reminder_without_reset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let sent_at = Utc.with_ymd_and_hms(2026, 3, 3, 9, 0, 0).unwrap();
    let appointment = factory::appointment::AppointmentFactory::new(db, clinic.id, patient.id, doctor.id)
        .date(Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap())
        .reminder_sent_at(sent_at)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(
            clinic.id,
            appointment.id,
            patient.id,
            doctor.id,
            None,
            appointment.date,
            30_000,
            false,
        )
        .await?
        .unwrap();

    assert_eq!(updated.reminder_sent_at, Some(sent_at));
    assert_eq!(updated.price_cents, 30_000);

    Ok(())
}

/// Tests updating an appointment through the wrong clinic.
///
/// Expected: Ok with None and the stored row preserved
#[tokio::test]
async fn returns_none_for_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, doctor, patient, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .update(
            other.id,
            appointment.id,
            patient.id,
            doctor.id,
            None,
            appointment.date,
            1,
            false,
        )
        .await?;

    assert!(result.is_none());

    let untouched = repo.get_row_by_id(clinic.id, appointment.id).await?.unwrap();
    assert_eq!(untouched.price_cents, appointment.price_cents);

    Ok(())
}
