use super::*;

/// Tests creating a new doctor.
///
/// Verifies that the doctor is created with the given details and starts
/// without any schedule rows or legacy availability window.
///
/// Expected: Ok with the doctor created and an empty schedule
#[tokio::test]
async fn creates_doctor_without_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = DoctorRepository::new(db);
    let result = repo
        .create(CreateDoctorParam {
            clinic_id: clinic.id,
            name: "Dr. Souza".to_string(),
            specialty: "Cardiology".to_string(),
            appointment_price_cents: 25_000,
        })
        .await;

    assert!(result.is_ok());
    let doctor = result.unwrap();
    assert_eq!(doctor.clinic_id, clinic.id);
    assert_eq!(doctor.name, "Dr. Souza");
    assert_eq!(doctor.specialty, "Cardiology");
    assert_eq!(doctor.appointment_price_cents, 25_000);
    assert!(doctor.business_hours.is_empty());
    assert!(doctor.available_from_weekday.is_none());

    Ok(())
}
