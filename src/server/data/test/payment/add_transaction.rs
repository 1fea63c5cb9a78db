use super::*;

/// Tests recording a transaction against an aggregate.
///
/// Verifies that the method is stored under its wire name and the amount
/// kept as given.
///
/// Expected: Ok with the transaction stored
#[tokio::test]
async fn records_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let payment = factory::create_payment(db, clinic.id, appointment.id, 20_000).await?;

    let repo = PaymentRepository::new(db);
    let result = repo
        .add_transaction(payment.id, PaymentMethod::Pix, 20_000)
        .await;

    assert!(result.is_ok());
    let transaction = result.unwrap();
    assert_eq!(transaction.payment_id, payment.id);
    assert_eq!(transaction.method, "pix");
    assert_eq!(transaction.amount_cents, 20_000);

    Ok(())
}
