use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentTransactionDto, PaymentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::payment::CreatePaymentTransactionParam,
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Get the payment record for an appointment.
///
/// Returns the aggregate (total, paid, remaining, change, status) together
/// with every recorded transaction, oldest first.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the appointment belongs to
/// - `appointment_id` - Appointment whose payment to fetch
///
/// # Returns
/// - `200 OK` - Payment record with transactions
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - No payment record for the appointment
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/appointments/{appointment_id}/payment",
    tag = PAYMENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved payment", body = PaymentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, appointment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = PaymentService::new(&state.db);

    let payment = service.get_for_appointment(clinic_id, appointment_id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Record a payment transaction.
///
/// Adds one transaction (method and amount) to the appointment's payment
/// record and re-reconciles the aggregate: paid total, remaining balance,
/// change owed and status. Change is only ever given on cash, so a non-cash
/// amount above the remaining balance is rejected.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the appointment belongs to
/// - `appointment_id` - Appointment being paid for
/// - `payload` - Transaction data (method and amount in cents)
///
/// # Returns
/// - `201 Created` - Transaction recorded, returns the updated payment
/// - `400 Bad Request` - Unknown method, non-positive amount, or non-cash overpayment
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - No payment record for the appointment
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clinics/{clinic_id}/appointments/{appointment_id}/payment/transactions",
    tag = PAYMENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    request_body = CreatePaymentTransactionDto,
    responses(
        (status = 201, description = "Transaction recorded", body = PaymentDto),
        (status = 400, description = "Invalid transaction data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_payment_transaction(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, appointment_id)): Path<(i32, i32)>,
    Json(payload): Json<CreatePaymentTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = PaymentService::new(&state.db);

    let params = CreatePaymentTransactionParam::from_dto(clinic_id, appointment_id, payload)?;

    let payment = service.add_transaction(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// Delete a payment transaction.
///
/// Removes a mis-entered transaction and re-reconciles the aggregate, which
/// can move a settled payment back to partial or pending.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the appointment belongs to
/// - `appointment_id` - Appointment the transaction belongs to
/// - `transaction_id` - Transaction ID to delete
///
/// # Returns
/// - `200 OK` - Transaction deleted, returns the updated payment
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Payment or transaction not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clinics/{clinic_id}/appointments/{appointment_id}/payment/transactions/{transaction_id}",
    tag = PAYMENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("appointment_id" = i32, Path, description = "Appointment ID"),
        ("transaction_id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction deleted", body = PaymentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Payment or transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_payment_transaction(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, appointment_id, transaction_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = PaymentService::new(&state.db);

    let payment = service
        .delete_transaction(user.id, clinic_id, appointment_id, transaction_id)
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
