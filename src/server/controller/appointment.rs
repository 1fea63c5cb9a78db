use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        appointment::{
            AppointmentDto, CreateAppointmentDto, PaginatedAppointmentsDto, UpdateAppointmentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::appointment::{CreateAppointmentParam, GetAppointmentsParam, UpdateAppointmentParam},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

/// Query parameters for the paginated appointment list.
#[derive(Deserialize)]
pub struct AppointmentListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Restrict to one doctor.
    pub doctor_id: Option<i32>,
    /// Earliest calendar day to include, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest calendar day to include, inclusive.
    pub to: Option<NaiveDate>,
}

fn default_entries() -> u64 {
    10
}

/// Query parameters for the booked-times endpoint.
#[derive(Deserialize)]
pub struct BookedTimesParams {
    /// Doctor whose bookings to look up.
    pub doctor_id: i32,
    /// Calendar day to look up, as YYYY-MM-DD.
    pub date: NaiveDate,
}

/// Get paginated appointments for a clinic.
///
/// Rows are enriched with patient and doctor names and payment status, and
/// ordered by date. Supports optional filtering by doctor and by a calendar
/// day range.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to fetch appointments for
/// - `params` - Pagination and filter parameters
///
/// # Returns
/// - `200 OK` - Paginated list of appointments
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/appointments",
    tag = APPOINTMENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("doctor_id" = Option<i32>, Query, description = "Restrict to one doctor"),
        ("from" = Option<String>, Query, description = "Earliest day to include, as YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Latest day to include, as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Successfully retrieved appointments", body = PaginatedAppointmentsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Query(params): Query<AppointmentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = AppointmentService::new(&state.db, &state.mailer);

    let appointments = service
        .get_paginated(GetAppointmentsParam {
            clinic_id,
            doctor_id: params.doctor_id,
            from: params.from,
            to: params.to,
            page: params.page,
            per_page: params.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(appointments.into_dto())))
}

/// Book a new appointment.
///
/// Validates that the patient, doctor and optional insurance plan belong to
/// the clinic and that the requested slot is in the doctor's available set
/// for that day. The price comes from the insurance plan when one is chosen,
/// the doctor's default price otherwise. Booking opens the payment record and
/// sends a confirmation email to the patient.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to book in
/// - `payload` - Booking data (patient, doctor, optional plan, date, slot)
///
/// # Returns
/// - `201 Created` - Successfully booked appointment
/// - `400 Bad Request` - Invalid data or a participant from another clinic
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `409 Conflict` - The requested slot is not available
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clinics/{clinic_id}/appointments",
    tag = APPOINTMENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID")
    ),
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Successfully booked appointment", body = AppointmentDto),
        (status = 400, description = "Invalid appointment data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 409, description = "The requested slot is not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = AppointmentService::new(&state.db, &state.mailer);

    let params = CreateAppointmentParam::from_dto(clinic_id, payload)?;

    let appointment = service.create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(appointment.into_dto())))
}

/// Get a specific appointment by ID.
///
/// Returns the appointment enriched with participant names and the payment
/// status of its aggregate.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the appointment belongs to
/// - `appointment_id` - Appointment ID to fetch
///
/// # Returns
/// - `200 OK` - Appointment details
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Appointment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved appointment", body = AppointmentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment_by_id(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, appointment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = AppointmentService::new(&state.db, &state.mailer);

    let appointment = service.get(clinic_id, appointment_id).await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Update an appointment.
///
/// Reschedules and/or changes the patient, doctor or insurance plan. The
/// requested slot is validated against the doctor's availability, except the
/// appointment's own current slot which stays valid during an edit. The price
/// is re-resolved and the payment record's total re-reconciled. Rescheduling
/// to a new time clears the reminder flag and sends a reschedule email.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the appointment belongs to
/// - `appointment_id` - Appointment ID to update
/// - `payload` - Updated booking data
///
/// # Returns
/// - `200 OK` - Successfully updated appointment
/// - `400 Bad Request` - Invalid data or a participant from another clinic
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Appointment not found
/// - `409 Conflict` - The requested slot is not available
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clinics/{clinic_id}/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Successfully updated appointment", body = AppointmentDto),
        (status = 400, description = "Invalid appointment data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 409, description = "The requested slot is not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, appointment_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = AppointmentService::new(&state.db, &state.mailer);

    let params = UpdateAppointmentParam::from_dto(clinic_id, appointment_id, payload)?;

    let appointment = service.update(user.id, params).await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Cancel an appointment.
///
/// Removes the appointment and its payment rows, then sends a cancellation
/// email to the patient.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the appointment belongs to
/// - `appointment_id` - Appointment ID to cancel
///
/// # Returns
/// - `204 No Content` - Successfully cancelled appointment
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Appointment not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clinics/{clinic_id}/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 204, description = "Successfully cancelled appointment"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, appointment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = AppointmentService::new(&state.db, &state.mailer);

    service.delete(user.id, clinic_id, appointment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a doctor's booked times for a day.
///
/// Returns the occupied "HH:MM:SS" UTC time strings for the doctor on that
/// calendar day. The booking form uses this to grey out taken slots without
/// recomputing the full availability set.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the doctor belongs to
/// - `params` - The doctor and calendar day to look up
///
/// # Returns
/// - `200 OK` - Occupied time strings, empty when the day is free
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Doctor not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/appointments/booked",
    tag = APPOINTMENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("doctor_id" = i32, Query, description = "Doctor ID"),
        ("date" = String, Query, description = "Calendar day as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booked times", body = Vec<String>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booked_times(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Query(params): Query<BookedTimesParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = AppointmentService::new(&state.db, &state.mailer);

    let times = service
        .booked_times(clinic_id, params.doctor_id, params.date)
        .await?;

    let times = times
        .into_iter()
        .map(|t| t.format("%H:%M:%S").to_string())
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(times)))
}
