use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::payment::PaymentRepository,
    error::AppError,
    model::payment::{
        CreatePaymentTransactionParam, Payment, PaymentMethod, PaymentStatus, PaymentTransaction,
    },
    service::security_log::SecurityLogService,
};

/// Derives the aggregate figures from a payment's transaction history.
///
/// Change is only ever given on cash, so the overpaid amount is capped by the
/// cash actually handed over. Card terminals and bank rails charge exact
/// amounts and never produce change.
///
/// # Arguments
/// - `total_cents` - Amount owed in cents
/// - `transactions` - Every recorded transaction for the aggregate
///
/// # Returns
/// The paid total, the change owed back, and the settlement status.
pub fn reconcile(
    total_cents: i32,
    transactions: &[PaymentTransaction],
) -> (i32, i32, PaymentStatus) {
    let paid_cents: i32 = transactions.iter().map(|t| t.amount_cents).sum();
    let cash_cents: i32 = transactions
        .iter()
        .filter(|t| t.method == PaymentMethod::Cash)
        .map(|t| t.amount_cents)
        .sum();

    let change_cents = (paid_cents - total_cents).max(0).min(cash_cents);

    let status = if paid_cents == 0 {
        PaymentStatus::Pending
    } else if paid_cents < total_cents {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Paid
    };

    (paid_cents, change_cents, status)
}

/// Service for settling appointment payments.
///
/// Each appointment owns one payment aggregate opened at booking time. Staff
/// record transactions against it as the patient pays, and the aggregate's
/// paid total, change, and status are re-derived from the full transaction
/// history on every mutation.
pub struct PaymentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the payment aggregate for an appointment.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the payment must belong to
    /// - `appointment_id` - Appointment whose payment to fetch
    ///
    /// # Returns
    /// - `Ok(Payment)` - The aggregate with its transaction history
    /// - `Err(AppError::NotFound)` - No aggregate for that appointment
    pub async fn get_for_appointment(
        &self,
        clinic_id: i32,
        appointment_id: i32,
    ) -> Result<Payment, AppError> {
        let payment_repo = PaymentRepository::new(self.db);

        let Some(payment) = payment_repo.get_by_appointment(clinic_id, appointment_id).await?
        else {
            return Err(AppError::NotFound(
                "Payment not found for this appointment.".to_string(),
            ));
        };

        Ok(payment)
    }

    /// Records a payment transaction against an appointment.
    ///
    /// Cash may exceed the remaining balance, producing change. Every other
    /// method charges an exact amount and is rejected when it would overpay.
    ///
    /// # Arguments
    /// - `acting_user_id` - User recording the payment
    /// - `param` - Parameters with the appointment, method, and amount
    ///
    /// # Returns
    /// - `Ok(Payment)` - The reconciled aggregate
    /// - `Err(AppError::NotFound)` - No aggregate for that appointment
    /// - `Err(AppError::BadRequest)` - Non-positive amount, or a non-cash
    ///   overpayment
    pub async fn add_transaction(
        &self,
        acting_user_id: i32,
        param: CreatePaymentTransactionParam,
    ) -> Result<Payment, AppError> {
        let clinic_id = param.clinic_id;
        let result = self.add_transaction_validated(param).await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "add_transaction",
                "payment",
                result.as_ref().map(|p| p.id).ok(),
                &result,
            )
            .await;

        result
    }

    async fn add_transaction_validated(
        &self,
        param: CreatePaymentTransactionParam,
    ) -> Result<Payment, AppError> {
        let payment_repo = PaymentRepository::new(self.db);

        if param.amount_cents <= 0 {
            return Err(AppError::BadRequest("Amount must be positive.".to_string()));
        }

        let payment = self
            .get_for_appointment(param.clinic_id, param.appointment_id)
            .await?;

        if param.method != PaymentMethod::Cash && param.amount_cents > payment.remaining_cents() {
            return Err(AppError::BadRequest(
                "Only cash payments can exceed the remaining balance.".to_string(),
            ));
        }

        let entity = payment_repo
            .add_transaction(payment.id, param.method, param.amount_cents)
            .await?;

        let mut transactions = payment.transactions.clone();
        transactions.push(PaymentTransaction::from_entity(entity)?);

        let (paid_cents, change_cents, status) = reconcile(payment.total_cents, &transactions);
        payment_repo
            .update_aggregate(payment.id, payment.total_cents, paid_cents, change_cents, status)
            .await?;

        self.get_for_appointment(param.clinic_id, param.appointment_id)
            .await
    }

    /// Removes a mistakenly recorded transaction and re-reconciles.
    ///
    /// # Arguments
    /// - `acting_user_id` - User correcting the payment
    /// - `clinic_id` - Clinic the payment must belong to
    /// - `appointment_id` - Appointment whose payment to correct
    /// - `transaction_id` - ID of the transaction to remove
    ///
    /// # Returns
    /// - `Ok(Payment)` - The reconciled aggregate
    /// - `Err(AppError::NotFound)` - No aggregate for that appointment, or the
    ///   transaction is not part of it
    pub async fn delete_transaction(
        &self,
        acting_user_id: i32,
        clinic_id: i32,
        appointment_id: i32,
        transaction_id: i32,
    ) -> Result<Payment, AppError> {
        let result = self
            .delete_transaction_validated(clinic_id, appointment_id, transaction_id)
            .await;

        SecurityLogService::new(self.db)
            .record_outcome(
                Some(clinic_id),
                Some(acting_user_id),
                "delete_transaction",
                "payment",
                result.as_ref().map(|p| p.id).ok(),
                &result,
            )
            .await;

        result
    }

    async fn delete_transaction_validated(
        &self,
        clinic_id: i32,
        appointment_id: i32,
        transaction_id: i32,
    ) -> Result<Payment, AppError> {
        let payment_repo = PaymentRepository::new(self.db);

        let payment = self.get_for_appointment(clinic_id, appointment_id).await?;

        if !payment.transactions.iter().any(|t| t.id == transaction_id) {
            return Err(AppError::NotFound("Transaction not found.".to_string()));
        }

        if !payment_repo.delete_transaction(transaction_id).await? {
            return Err(AppError::NotFound("Transaction not found.".to_string()));
        }

        let remaining: Vec<PaymentTransaction> = payment
            .transactions
            .iter()
            .filter(|t| t.id != transaction_id)
            .cloned()
            .collect();

        let (paid_cents, change_cents, status) = reconcile(payment.total_cents, &remaining);
        payment_repo
            .update_aggregate(payment.id, payment.total_cents, paid_cents, change_cents, status)
            .await?;

        self.get_for_appointment(clinic_id, appointment_id).await
    }

    /// Re-reconciles an aggregate against a new appointment price.
    ///
    /// Called when an appointment edit changes the price. An appointment
    /// without an aggregate is logged and skipped rather than failing the
    /// edit.
    ///
    /// # Arguments
    /// - `clinic_id` - Clinic the payment belongs to
    /// - `appointment_id` - Appointment whose price changed
    /// - `total_cents` - The new amount owed in cents
    pub async fn sync_total(
        &self,
        clinic_id: i32,
        appointment_id: i32,
        total_cents: i32,
    ) -> Result<(), AppError> {
        let payment_repo = PaymentRepository::new(self.db);

        let Some(payment) = payment_repo.get_by_appointment(clinic_id, appointment_id).await?
        else {
            tracing::warn!(
                "No payment aggregate for appointment {} in clinic {}",
                appointment_id,
                clinic_id
            );
            return Ok(());
        };

        let (paid_cents, change_cents, status) = reconcile(total_cents, &payment.transactions);
        payment_repo
            .update_aggregate(payment.id, total_cents, paid_cents, change_cents, status)
            .await?;

        Ok(())
    }
}
