use super::*;

/// Tests deleting a recorded transaction.
///
/// Expected: Ok(true) and the transaction gone from the aggregate
#[tokio::test]
async fn deletes_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let payment = factory::create_payment(db, clinic.id, appointment.id, 20_000).await?;
    let transaction = factory::create_transaction(db, payment.id, "cash", 10_000).await?;

    let repo = PaymentRepository::new(db);
    let deleted = repo.delete_transaction(transaction.id).await?;

    assert!(deleted);

    let found = repo
        .get_by_appointment(clinic.id, appointment.id)
        .await
        .unwrap()
        .unwrap();
    assert!(found.transactions.is_empty());

    Ok(())
}

/// Tests deleting a transaction that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    let deleted = repo.delete_transaction(999).await?;

    assert!(!deleted);

    Ok(())
}
