//! Payment factory for creating test payment aggregates and transactions.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a payment aggregate for an appointment.
///
/// The aggregate starts in the `pending` state with nothing paid, matching
/// how the service layer opens one when an appointment is booked.
///
/// # Arguments
/// - `db` - Database connection
/// - `clinic_id` - ID of the clinic the payment belongs to
/// - `appointment_id` - ID of the appointment the payment settles
/// - `total_cents` - Amount owed for the appointment
///
/// # Returns
/// - `Ok(entity::appointment_payment::Model)` - Created payment aggregate
/// - `Err(DbErr)` - Database error during insert
pub async fn create_payment(
    db: &DatabaseConnection,
    clinic_id: i32,
    appointment_id: i32,
    total_cents: i32,
) -> Result<entity::appointment_payment::Model, DbErr> {
    let now = Utc::now();
    entity::appointment_payment::ActiveModel {
        id: ActiveValue::NotSet,
        clinic_id: ActiveValue::Set(clinic_id),
        appointment_id: ActiveValue::Set(appointment_id),
        total_cents: ActiveValue::Set(total_cents),
        paid_cents: ActiveValue::Set(0),
        change_cents: ActiveValue::Set(0),
        status: ActiveValue::Set("pending".to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Creates a payment transaction against an aggregate.
///
/// Does not touch the aggregate totals; tests exercising reconciliation go
/// through the payment service instead.
///
/// # Arguments
/// - `db` - Database connection
/// - `payment_id` - ID of the payment aggregate the transaction belongs to
/// - `method` - Stored payment method string, such as `cash` or `credit_card`
/// - `amount_cents` - Amount tendered in this transaction
///
/// # Returns
/// - `Ok(entity::payment_transaction::Model)` - Created transaction
/// - `Err(DbErr)` - Database error during insert
pub async fn create_transaction(
    db: &DatabaseConnection,
    payment_id: i32,
    method: impl Into<String>,
    amount_cents: i32,
) -> Result<entity::payment_transaction::Model, DbErr> {
    create_transaction_at(db, payment_id, method, amount_cents, Utc::now()).await
}

/// Creates a payment transaction recorded at a fixed instant.
///
/// Reporting buckets transactions by when they were recorded, so those tests
/// pin `created_at` instead of taking the wall clock.
///
/// # Arguments
/// - `db` - Database connection
/// - `payment_id` - ID of the payment aggregate the transaction belongs to
/// - `method` - Stored payment method string, such as `cash` or `credit_card`
/// - `amount_cents` - Amount tendered in this transaction
/// - `created_at` - Instant the transaction was recorded
///
/// # Returns
/// - `Ok(entity::payment_transaction::Model)` - Created transaction
/// - `Err(DbErr)` - Database error during insert
pub async fn create_transaction_at(
    db: &DatabaseConnection,
    payment_id: i32,
    method: impl Into<String>,
    amount_cents: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::payment_transaction::Model, DbErr> {
    entity::payment_transaction::ActiveModel {
        id: ActiveValue::NotSet,
        payment_id: ActiveValue::Set(payment_id),
        method: ActiveValue::Set(method.into()),
        amount_cents: ActiveValue::Set(amount_cents),
        created_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_appointment_with_dependencies;

    #[tokio::test]
    async fn creates_pending_payment() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, _, _, appointment) = create_appointment_with_dependencies(db).await?;
        let payment = create_payment(db, clinic.id, appointment.id, 20_000).await?;

        assert_eq!(payment.appointment_id, appointment.id);
        assert_eq!(payment.total_cents, 20_000);
        assert_eq!(payment.paid_cents, 0);
        assert_eq!(payment.status, "pending");

        Ok(())
    }

    #[tokio::test]
    async fn creates_transaction_against_payment() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (clinic, _, _, appointment) = create_appointment_with_dependencies(db).await?;
        let payment = create_payment(db, clinic.id, appointment.id, 20_000).await?;
        let transaction = create_transaction(db, payment.id, "credit_card", 12_000).await?;

        assert_eq!(transaction.payment_id, payment.id);
        assert_eq!(transaction.method, "credit_card");
        assert_eq!(transaction.amount_cents, 12_000);

        Ok(())
    }
}
