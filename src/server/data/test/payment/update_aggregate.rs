use super::*;

/// Tests rewriting the reconciled columns of an aggregate.
///
/// Verifies that totals, paid amount, change, and status all land as the
/// reconciliation computed them.
///
/// Expected: Ok with the aggregate reflecting the new values
#[tokio::test]
async fn rewrites_reconciled_columns() -> Result<(), DbErr> {
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
    repo.update_aggregate(payment.id, 20_000, 25_000, 5_000, PaymentStatus::Paid)
        .await?;

    let found = repo
        .get_by_appointment(clinic.id, appointment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.total_cents, 20_000);
    assert_eq!(found.paid_cents, 25_000);
    assert_eq!(found.change_cents, 5_000);
    assert_eq!(found.status, PaymentStatus::Paid);

    Ok(())
}
