use super::*;

/// Tests opening the payment aggregate for a booked appointment.
///
/// Verifies that the aggregate starts pending with the appointment price
/// as its total and nothing paid.
///
/// Expected: Ok with a pending aggregate
#[tokio::test]
async fn opens_pending_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let result = repo
        .open_for_appointment(clinic.id, appointment.id, 20_000)
        .await;

    assert!(result.is_ok());
    let payment = result.unwrap();
    assert_eq!(payment.appointment_id, appointment.id);
    assert_eq!(payment.total_cents, 20_000);
    assert_eq!(payment.paid_cents, 0);
    assert_eq!(payment.change_cents, 0);
    assert_eq!(payment.status, "pending");

    Ok(())
}

/// Tests opening a second aggregate for the same appointment.
///
/// Verifies that the unique constraint on the appointment reference keeps
/// the payment history in one place.
///
/// Expected: Err on the second open
#[tokio::test]
async fn rejects_second_aggregate_for_same_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    repo.open_for_appointment(clinic.id, appointment.id, 20_000)
        .await?;

    let result = repo
        .open_for_appointment(clinic.id, appointment.id, 20_000)
        .await;

    assert!(result.is_err());

    Ok(())
}
