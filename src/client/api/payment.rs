use crate::{
    client::model::error::ApiError,
    model::payment::{CreatePaymentTransactionDto, PaymentDto},
};

use super::helper::{delete, get, parse_response, post, send_request, serialize_json};

/// Get the payment record of an appointment with its transactions
pub async fn get_payment(clinic_id: i32, appointment_id: i32) -> Result<PaymentDto, ApiError> {
    let url = format!(
        "/api/clinics/{}/appointments/{}/payment",
        clinic_id, appointment_id
    );

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Record a payment towards an appointment, returning the updated payment
pub async fn add_payment_transaction(
    clinic_id: i32,
    appointment_id: i32,
    method: String,
    amount_cents: i32,
) -> Result<PaymentDto, ApiError> {
    let url = format!(
        "/api/clinics/{}/appointments/{}/payment/transactions",
        clinic_id, appointment_id
    );
    let payload = CreatePaymentTransactionDto {
        method,
        amount_cents,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Void a recorded payment, returning the updated payment
pub async fn delete_payment_transaction(
    clinic_id: i32,
    appointment_id: i32,
    transaction_id: i32,
) -> Result<PaymentDto, ApiError> {
    let url = format!(
        "/api/clinics/{}/appointments/{}/payment/transactions/{}",
        clinic_id, appointment_id, transaction_id
    );

    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}
