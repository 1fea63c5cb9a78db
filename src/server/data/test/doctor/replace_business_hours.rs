use super::*;

/// Tests replacing a doctor's weekly schedule.
///
/// Verifies that the previous rows are dropped and only the new set
/// remains afterwards.
///
/// Expected: Ok with exactly the new schedule rows stored
#[tokio::test]
async fn replaces_existing_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    factory::create_business_hour(db, doctor.id, 1, "08:00:00", "12:00:00").await?;
    factory::create_business_hour(db, doctor.id, 2, "08:00:00", "12:00:00").await?;

    let repo = DoctorRepository::new(db);
    let result = repo
        .replace_business_hours(
            clinic.id,
            doctor.id,
            &[
                BusinessHour {
                    weekday: 5,
                    enabled: true,
                    start_time: Some("14:00:00".to_string()),
                    end_time: Some("20:00:00".to_string()),
                },
                BusinessHour {
                    weekday: 6,
                    enabled: false,
                    start_time: None,
                    end_time: None,
                },
            ],
        )
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap().unwrap();
    assert_eq!(updated.business_hours.len(), 2);
    assert_eq!(updated.business_hours[0].weekday, 5);
    assert!(updated.business_hours[0].enabled);
    assert_eq!(
        updated.business_hours[0].start_time.as_deref(),
        Some("14:00:00")
    );
    assert_eq!(updated.business_hours[1].weekday, 6);
    assert!(!updated.business_hours[1].enabled);
    assert!(updated.business_hours[1].start_time.is_none());

    Ok(())
}

/// Tests that writing a schedule retires the legacy availability window.
///
/// Doctors from before the per-weekday schedule carry a single weekday
/// range on their own row. Verifies that saving a schedule clears those
/// columns so only one representation remains.
///
/// Expected: Ok with the legacy columns set to None
#[tokio::test]
async fn clears_legacy_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::doctor::DoctorFactory::new(db, clinic.id)
        .legacy_window(1, 5, "08:00:00", "18:00:00")
        .build()
        .await?;

    let repo = DoctorRepository::new(db);
    let updated = repo
        .replace_business_hours(
            clinic.id,
            doctor.id,
            &[BusinessHour {
                weekday: 2,
                enabled: true,
                start_time: Some("09:00:00".to_string()),
                end_time: Some("17:00:00".to_string()),
            }],
        )
        .await?
        .unwrap();

    assert!(updated.available_from_weekday.is_none());
    assert!(updated.available_to_weekday.is_none());
    assert!(updated.available_from_time.is_none());
    assert!(updated.available_to_time.is_none());
    assert_eq!(updated.business_hours.len(), 1);

    Ok(())
}

/// Tests replacing a schedule through the wrong clinic.
///
/// Verifies that the write misses and the doctor's schedule survives.
///
/// Expected: Ok with None and the original rows preserved
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
    factory::create_business_hour(db, doctor.id, 1, "08:00:00", "12:00:00").await?;

    let repo = DoctorRepository::new(db);
    let result = repo
        .replace_business_hours(
            other.id,
            doctor.id,
            &[BusinessHour {
                weekday: 4,
                enabled: true,
                start_time: Some("10:00:00".to_string()),
                end_time: Some("16:00:00".to_string()),
            }],
        )
        .await?;

    assert!(result.is_none());

    let untouched = repo.get_by_id(clinic.id, doctor.id).await?.unwrap();
    assert_eq!(untouched.business_hours.len(), 1);
    assert_eq!(untouched.business_hours[0].weekday, 1);

    Ok(())
}
