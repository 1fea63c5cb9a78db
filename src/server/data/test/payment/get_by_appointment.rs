use super::*;

/// Tests loading a payment aggregate with its transaction history.
///
/// Verifies that the stored status and method strings parse back into
/// their domain values and that transactions come back oldest first.
///
/// Expected: Ok with the aggregate and ordered transactions
#[tokio::test]
async fn loads_aggregate_with_ordered_transactions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let payment = factory::create_payment(db, clinic.id, appointment.id, 20_000).await?;

    let base = Utc.with_ymd_and_hms(2026, 3, 4, 10, 0, 0).unwrap();
    factory::create_transaction_at(db, payment.id, "credit_card", 12_000, base + Duration::hours(1))
        .await?;
    factory::create_transaction_at(db, payment.id, "cash", 8_000, base).await?;

    let repo = PaymentRepository::new(db);
    let result = repo.get_by_appointment(clinic.id, appointment.id).await;

    assert!(result.is_ok());
    let found = result.unwrap().unwrap();
    assert_eq!(found.id, payment.id);
    assert_eq!(found.total_cents, 20_000);
    assert_eq!(found.status, PaymentStatus::Pending);
    assert_eq!(found.transactions.len(), 2);
    assert_eq!(found.transactions[0].method, PaymentMethod::Cash);
    assert_eq!(found.transactions[0].amount_cents, 8_000);
    assert_eq!(found.transactions[1].method, PaymentMethod::CreditCard);
    assert_eq!(found.transactions[1].amount_cents, 12_000);

    Ok(())
}

/// Tests loading the aggregate through the wrong clinic.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    factory::create_payment(db, clinic.id, appointment.id, 20_000).await?;
    let other = factory::create_clinic(db).await?;

    let repo = PaymentRepository::new(db);
    let result = repo.get_by_appointment(other.id, appointment.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Tests loading an appointment that never had an aggregate opened.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_without_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let result = repo.get_by_appointment(clinic.id, appointment.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
