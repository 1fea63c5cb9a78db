use super::*;

/// Tests creating an appointment row.
///
/// Verifies that the row stores the resolved price and slot and starts
/// without a reminder stamp.
///
/// Expected: Ok with the appointment stored and no reminder sent
#[tokio::test]
async fn creates_appointment_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let date = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();

    let repo = AppointmentRepository::new(db);
    let result = repo
        .create(clinic.id, patient.id, doctor.id, None, date, 25_000)
        .await;

    assert!(result.is_ok());
    let appointment = result.unwrap();
    assert_eq!(appointment.clinic_id, clinic.id);
    assert_eq!(appointment.patient_id, patient.id);
    assert_eq!(appointment.doctor_id, doctor.id);
    assert_eq!(appointment.date, date);
    assert_eq!(appointment.price_cents, 25_000);
    assert!(appointment.health_insurance_plan_id.is_none());
    assert!(appointment.reminder_sent_at.is_none());

    Ok(())
}

/// Tests creating an appointment covered by an insurance plan.
///
/// Expected: Ok with the plan reference stored
#[tokio::test]
async fn stores_insurance_plan_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let plan = factory::create_insurance_plan(db, clinic.id).await?;
    let date = Utc.with_ymd_and_hms(2026, 3, 4, 10, 0, 0).unwrap();

    let repo = AppointmentRepository::new(db);
    let appointment = repo
        .create(clinic.id, patient.id, doctor.id, Some(plan.id), date, 18_000)
        .await?;

    assert_eq!(appointment.health_insurance_plan_id, Some(plan.id));

    Ok(())
}
