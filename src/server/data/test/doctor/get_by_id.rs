use super::*;

/// Tests loading a doctor together with their weekly schedule.
///
/// Verifies that the schedule rows come back attached to the doctor, in
/// weekday order.
///
/// Expected: Ok with the doctor and schedule rows sorted by weekday
#[tokio::test]
async fn loads_doctor_with_schedule_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    factory::create_business_hour(db, doctor.id, 3, "13:00:00", "18:00:00").await?;
    factory::create_business_hour(db, doctor.id, 1, "08:00:00", "12:00:00").await?;

    let repo = DoctorRepository::new(db);
    let result = repo.get_by_id(clinic.id, doctor.id).await;

    assert!(result.is_ok());
    let found = result.unwrap().unwrap();
    assert_eq!(found.id, doctor.id);
    assert_eq!(found.business_hours.len(), 2);
    assert_eq!(found.business_hours[0].weekday, 1);
    assert_eq!(
        found.business_hours[0].start_time.as_deref(),
        Some("08:00:00")
    );
    assert_eq!(found.business_hours[1].weekday, 3);

    Ok(())
}

/// Tests loading a doctor through the wrong clinic.
///
/// Verifies that a doctor belonging to one clinic is invisible when
/// requested under another clinic's ID.
///
/// Expected: Ok with None
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
    let doctor = factory::create_doctor(db, clinic.id).await?;

    let repo = DoctorRepository::new(db);
    let result = repo.get_by_id(other.id, doctor.id).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests loading a doctor that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = DoctorRepository::new(db);
    let result = repo.get_by_id(clinic.id, 999).await?;

    assert!(result.is_none());

    Ok(())
}
