use super::*;

/// Tests reading a clinic's transactions inside a time range.
///
/// Verifies the inclusive start, exclusive end, the oldest-first order,
/// and that each transaction is paired with the appointment it pays for.
///
/// Expected: Ok with the in-range transactions and their appointment IDs
#[tokio::test]
async fn returns_transactions_inside_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let payment = factory::create_payment(db, clinic.id, appointment.id, 20_000).await?;

    let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();

    factory::create_transaction_at(db, payment.id, "cash", 1_000, start - Duration::seconds(1))
        .await?;
    let at_start = factory::create_transaction_at(db, payment.id, "cash", 2_000, start).await?;
    let inside = factory::create_transaction_at(
        db,
        payment.id,
        "pix",
        3_000,
        start + Duration::days(10),
    )
    .await?;
    factory::create_transaction_at(db, payment.id, "cash", 4_000, end).await?;

    let repo = PaymentRepository::new(db);
    let result = repo
        .get_clinic_transactions_in_range(clinic.id, start, end)
        .await;

    assert!(result.is_ok());
    let transactions = result.unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].0.id, at_start.id);
    assert_eq!(transactions[0].1, appointment.id);
    assert_eq!(transactions[1].0.id, inside.id);
    assert_eq!(transactions[1].1, appointment.id);

    Ok(())
}

/// Tests that the range read stays scoped to the clinic.
///
/// Transactions carry no clinic column of their own, so the scoping runs
/// through the aggregates. Verifies another clinic's transactions never
/// bleed in.
///
/// Expected: Ok with only the requested clinic's transactions
#[tokio::test]
async fn scopes_transactions_to_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let (other_clinic, _, _, other_appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let payment = factory::create_payment(db, clinic.id, appointment.id, 20_000).await?;
    let other_payment =
        factory::create_payment(db, other_clinic.id, other_appointment.id, 20_000).await?;

    let when = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
    let mine = factory::create_transaction_at(db, payment.id, "cash", 5_000, when).await?;
    factory::create_transaction_at(db, other_payment.id, "cash", 7_000, when).await?;

    let repo = PaymentRepository::new(db);
    let transactions = repo
        .get_clinic_transactions_in_range(
            clinic.id,
            Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap(),
        )
        .await?;

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].0.id, mine.id);

    Ok(())
}

/// Tests the range read for a clinic without any payments.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_clinic_without_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = PaymentRepository::new(db);
    let transactions = repo
        .get_clinic_transactions_in_range(
            clinic.id,
            Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap(),
        )
        .await?;

    assert!(transactions.is_empty());

    Ok(())
}
