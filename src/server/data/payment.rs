use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::payment::{Payment, PaymentMethod, PaymentStatus, PaymentTransaction},
};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens the payment aggregate for a freshly booked appointment
    ///
    /// The aggregate starts pending with nothing paid and the appointment
    /// price as its total.
    ///
    /// # Arguments
    /// - `clinic_id`: Clinic the payment belongs to
    /// - `appointment_id`: The appointment being paid for
    /// - `total_cents`: Amount owed in cents
    ///
    /// # Returns
    /// - `Ok(Model)`: The created aggregate
    /// - `Err(DbErr)`: Database error, including a second open for the same
    ///   appointment
    pub async fn open_for_appointment(
        &self,
        clinic_id: i32,
        appointment_id: i32,
        total_cents: i32,
    ) -> Result<entity::appointment_payment::Model, DbErr> {
        entity::appointment_payment::ActiveModel {
            clinic_id: ActiveValue::Set(clinic_id),
            appointment_id: ActiveValue::Set(appointment_id),
            total_cents: ActiveValue::Set(total_cents),
            paid_cents: ActiveValue::Set(0),
            change_cents: ActiveValue::Set(0),
            status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the payment aggregate for an appointment, with its transactions
    ///
    /// # Returns
    /// - `Ok(Some(Payment))`: The aggregate with transactions, oldest first
    /// - `Ok(None)`: No aggregate for that appointment in that clinic
    /// - `Err(AppError)`: Database error or unreadable stored status/method
    pub async fn get_by_appointment(
        &self,
        clinic_id: i32,
        appointment_id: i32,
    ) -> Result<Option<Payment>, AppError> {
        let Some(entity) = entity::prelude::AppointmentPayment::find()
            .filter(entity::appointment_payment::Column::ClinicId.eq(clinic_id))
            .filter(entity::appointment_payment::Column::AppointmentId.eq(appointment_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let transaction_rows = entity::prelude::PaymentTransaction::find()
            .filter(entity::payment_transaction::Column::PaymentId.eq(entity.id))
            .order_by_asc(entity::payment_transaction::Column::CreatedAt)
            .all(self.db)
            .await?;

        let transactions = transaction_rows
            .into_iter()
            .map(PaymentTransaction::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Payment::from_entity(entity, transactions)?))
    }

    /// Rewrites the reconciled columns of a payment aggregate
    ///
    /// Called after every transaction insert or delete with the values the
    /// reconciliation computed.
    ///
    /// # Returns
    /// - `Ok(())`: Aggregate updated
    /// - `Err(DbErr)`: Database error or no such aggregate
    pub async fn update_aggregate(
        &self,
        payment_id: i32,
        total_cents: i32,
        paid_cents: i32,
        change_cents: i32,
        status: PaymentStatus,
    ) -> Result<(), DbErr> {
        entity::appointment_payment::ActiveModel {
            id: ActiveValue::Unchanged(payment_id),
            total_cents: ActiveValue::Set(total_cents),
            paid_cents: ActiveValue::Set(paid_cents),
            change_cents: ActiveValue::Set(change_cents),
            status: ActiveValue::Set(status.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Records one transaction against a payment aggregate
    ///
    /// # Returns
    /// - `Ok(Model)`: The created transaction
    /// - `Err(DbErr)`: Database error
    pub async fn add_transaction(
        &self,
        payment_id: i32,
        method: PaymentMethod,
        amount_cents: i32,
    ) -> Result<entity::payment_transaction::Model, DbErr> {
        entity::payment_transaction::ActiveModel {
            payment_id: ActiveValue::Set(payment_id),
            method: ActiveValue::Set(method.as_str().to_string()),
            amount_cents: ActiveValue::Set(amount_cents),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes a transaction
    ///
    /// The caller re-reconciles the aggregate afterwards.
    ///
    /// # Returns
    /// - `Ok(true)`: The transaction was deleted
    /// - `Ok(false)`: No such transaction
    /// - `Err(DbErr)`: Database error
    pub async fn delete_transaction(&self, transaction_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PaymentTransaction::delete_many()
            .filter(entity::payment_transaction::Column::Id.eq(transaction_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the aggregates for a set of appointments
    ///
    /// Used by reporting to read paid and outstanding amounts in one query.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Aggregates for the given appointment IDs
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_appointment_ids(
        &self,
        appointment_ids: Vec<i32>,
    ) -> Result<Vec<entity::appointment_payment::Model>, DbErr> {
        if appointment_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AppointmentPayment::find()
            .filter(entity::appointment_payment::Column::AppointmentId.is_in(appointment_ids))
            .all(self.db)
            .await
    }

    /// Gets a clinic's transactions recorded within a UTC time range
    ///
    /// Transactions carry no clinic column, so the clinic's aggregates are
    /// fetched first and the transactions matched against them. Each
    /// transaction is returned with the appointment it pays for.
    ///
    /// # Arguments
    /// - `clinic_id`: Clinic whose transactions to read
    /// - `start`: Range start in UTC, inclusive
    /// - `end`: Range end in UTC, exclusive
    ///
    /// # Returns
    /// - `Ok(Vec<(Model, i32)>)`: Transactions with their appointment IDs,
    ///   oldest first
    /// - `Err(DbErr)`: Database error
    pub async fn get_clinic_transactions_in_range(
        &self,
        clinic_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<(entity::payment_transaction::Model, i32)>, DbErr> {
        let payments = entity::prelude::AppointmentPayment::find()
            .filter(entity::appointment_payment::Column::ClinicId.eq(clinic_id))
            .all(self.db)
            .await?;

        if payments.is_empty() {
            return Ok(Vec::new());
        }

        let appointment_by_payment: HashMap<i32, i32> = payments
            .iter()
            .map(|p| (p.id, p.appointment_id))
            .collect();
        let payment_ids: Vec<i32> = payments.iter().map(|p| p.id).collect();

        let transactions = entity::prelude::PaymentTransaction::find()
            .filter(entity::payment_transaction::Column::PaymentId.is_in(payment_ids))
            .filter(entity::payment_transaction::Column::CreatedAt.gte(start))
            .filter(entity::payment_transaction::Column::CreatedAt.lt(end))
            .order_by_asc(entity::payment_transaction::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(transactions
            .into_iter()
            .filter_map(|tx| {
                let appointment_id = appointment_by_payment.get(&tx.payment_id).copied()?;
                Some((tx, appointment_id))
            })
            .collect())
    }
}
