use super::*;

/// Tests listing appointments ordered by date.
///
/// Expected: Ok with the earliest appointment first
#[tokio::test]
async fn orders_appointments_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let later = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 5, 9, 0, 0).unwrap(),
    )
    .await?;
    let earlier = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap(),
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .get_paginated(GetAppointmentsParam {
            clinic_id: clinic.id,
            doctor_id: None,
            from: None,
            to: None,
            page: 0,
            per_page: 10,
        })
        .await;

    assert!(result.is_ok());
    let (appointments, total) = result.unwrap();
    assert_eq!(total, 2);
    assert_eq!(appointments[0].id, earlier.id);
    assert_eq!(appointments[1].id, later.id);

    Ok(())
}

/// Tests restricting the listing to one doctor.
///
/// Expected: Ok with only that doctor's appointments
#[tokio::test]
async fn filters_by_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor_a = factory::create_doctor(db, clinic.id).await?;
    let doctor_b = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let mine = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor_a.id,
        Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap(),
    )
    .await?;
    factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor_b.id,
        Utc.with_ymd_and_hms(2026, 3, 4, 10, 0, 0).unwrap(),
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let (appointments, total) = repo
        .get_paginated(GetAppointmentsParam {
            clinic_id: clinic.id,
            doctor_id: Some(doctor_a.id),
            from: None,
            to: None,
            page: 0,
            per_page: 10,
        })
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(appointments[0].id, mine.id);

    Ok(())
}

/// Tests restricting the listing to a day range.
///
/// Verifies that both bounds are whole calendar days: an appointment late
/// on the last day is still included, and one the day before the range is
/// not.
///
/// Expected: Ok with only the appointments inside the range
#[tokio::test]
async fn filters_by_day_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 3, 23, 0, 0).unwrap(),
    )
    .await?;
    let inside = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap(),
    )
    .await?;
    let last_day = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 5, 23, 30, 0).unwrap(),
    )
    .await?;
    factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 6, 0, 30, 0).unwrap(),
    )
    .await?;

    let repo = AppointmentRepository::new(db);
    let (appointments, total) = repo
        .get_paginated(GetAppointmentsParam {
            clinic_id: clinic.id,
            doctor_id: None,
            from: Some(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()),
            page: 0,
            per_page: 10,
        })
        .await
        .unwrap();

    assert_eq!(total, 2);
    assert_eq!(appointments[0].id, inside.id);
    assert_eq!(appointments[1].id, last_day.id);

    Ok(())
}

/// Tests pagination of the appointment listing.
///
/// Expected: Ok with non-overlapping pages and a stable total
#[tokio::test]
async fn paginates_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    for hour in 9..12 {
        factory::create_appointment(
            db,
            clinic.id,
            patient.id,
            doctor.id,
            Utc.with_ymd_and_hms(2026, 3, 4, hour, 0, 0).unwrap(),
        )
        .await?;
    }

    let repo = AppointmentRepository::new(db);

    let (page1, total) = repo
        .get_paginated(GetAppointmentsParam {
            clinic_id: clinic.id,
            doctor_id: None,
            from: None,
            to: None,
            page: 0,
            per_page: 2,
        })
        .await
        .unwrap();
    assert_eq!(page1.len(), 2);
    assert_eq!(total, 3);

    let (page2, _) = repo
        .get_paginated(GetAppointmentsParam {
            clinic_id: clinic.id,
            doctor_id: None,
            from: None,
            to: None,
            page: 1,
            per_page: 2,
        })
        .await
        .unwrap();
    assert_eq!(page2.len(), 1);
    assert_ne!(page1[0].id, page2[0].id);

    Ok(())
}
