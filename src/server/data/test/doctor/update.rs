use super::*;

/// Tests updating a doctor's details.
///
/// Verifies that name, specialty, and price are rewritten while the
/// schedule rows stay in place.
///
/// Expected: Ok with the updated doctor and their schedule intact
#[tokio::test]
async fn updates_details_and_keeps_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;
    factory::create_business_hour(db, doctor.id, 1, "08:00:00", "12:00:00").await?;

    let repo = DoctorRepository::new(db);
    let result = repo
        .update(UpdateDoctorParam {
            clinic_id: clinic.id,
            doctor_id: doctor.id,
            name: "Dr. Renamed".to_string(),
            specialty: "Dermatology".to_string(),
            appointment_price_cents: 30_000,
        })
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap().unwrap();
    assert_eq!(updated.name, "Dr. Renamed");
    assert_eq!(updated.specialty, "Dermatology");
    assert_eq!(updated.appointment_price_cents, 30_000);
    assert_eq!(updated.business_hours.len(), 1);

    Ok(())
}

/// Tests updating a doctor through the wrong clinic.
///
/// Verifies that the update misses and leaves the stored row untouched.
///
/// Expected: Ok with None and the original details preserved
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
    let result = repo
        .update(UpdateDoctorParam {
            clinic_id: other.id,
            doctor_id: doctor.id,
            name: "Hijacked".to_string(),
            specialty: "None".to_string(),
            appointment_price_cents: 1,
        })
        .await?;

    assert!(result.is_none());

    let untouched = repo.get_by_id(clinic.id, doctor.id).await?.unwrap();
    assert_eq!(untouched.name, doctor.name);

    Ok(())
}
