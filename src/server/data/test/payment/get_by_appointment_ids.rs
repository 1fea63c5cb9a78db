use super::*;

/// Tests batch-fetching aggregates for a set of appointments.
///
/// Expected: Ok with one aggregate per appointment that has one
#[tokio::test]
async fn fetches_aggregates_for_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, doctor, patient, first) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let second = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 4, 11, 0, 0).unwrap(),
    )
    .await?;
    let unpaid = factory::create_appointment(
        db,
        clinic.id,
        patient.id,
        doctor.id,
        Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap(),
    )
    .await?;
    factory::create_payment(db, clinic.id, first.id, 20_000).await?;
    factory::create_payment(db, clinic.id, second.id, 25_000).await?;

    let repo = PaymentRepository::new(db);
    let result = repo
        .get_by_appointment_ids(vec![first.id, second.id, unpaid.id])
        .await;

    assert!(result.is_ok());
    let aggregates = result.unwrap();
    assert_eq!(aggregates.len(), 2);
    assert!(aggregates.iter().any(|p| p.appointment_id == first.id));
    assert!(aggregates.iter().any(|p| p.appointment_id == second.id));

    Ok(())
}

/// Tests batch-fetching with no appointment IDs.
///
/// Expected: Ok with an empty list and no query issued
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    let aggregates = repo.get_by_appointment_ids(Vec::new()).await?;

    assert!(aggregates.is_empty());

    Ok(())
}
