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
        doctor::{
            CreateDoctorDto, DoctorDto, PaginatedDoctorsDto, SlotDto, UpdateBusinessHoursDto,
            UpdateDoctorDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::doctor::{
            CreateDoctorParam, GetDoctorsParam, UpdateBusinessHoursParam, UpdateDoctorParam,
        },
        service::doctor::DoctorService,
        state::AppState,
        util::time::format_time_local,
    },
};

/// Tag for grouping doctor endpoints in OpenAPI documentation
pub static DOCTOR_TAG: &str = "doctor";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Query parameters for the available-slots endpoint.
#[derive(Deserialize)]
pub struct AvailableSlotsParams {
    /// Calendar day to compute slots for, as YYYY-MM-DD.
    pub date: NaiveDate,
    /// Appointment being edited, whose own slot stays selectable.
    pub appointment_id: Option<i32>,
}

/// Get paginated doctors for a clinic.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to fetch doctors for
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of doctors
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/doctors",
    tag = DOCTOR_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved doctors", body = PaginatedDoctorsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctors(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = DoctorService::new(&state.db);

    let doctors = service
        .get_paginated(GetDoctorsParam {
            clinic_id,
            page: params.page,
            per_page: params.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(doctors.into_dto())))
}

/// Create a new doctor.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to create the doctor in
/// - `payload` - Doctor creation data (name, specialty, price)
///
/// # Returns
/// - `201 Created` - Successfully created doctor
/// - `400 Bad Request` - Invalid doctor data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clinics/{clinic_id}/doctors",
    tag = DOCTOR_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID")
    ),
    request_body = CreateDoctorDto,
    responses(
        (status = 201, description = "Successfully created doctor", body = DoctorDto),
        (status = 400, description = "Invalid doctor data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Json(payload): Json<CreateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = DoctorService::new(&state.db);

    let doctor = service
        .create(
            user.id,
            CreateDoctorParam {
                clinic_id,
                name: payload.name,
                specialty: payload.specialty,
                appointment_price_cents: payload.appointment_price_cents,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(doctor.into_dto())))
}

/// Get a specific doctor by ID.
///
/// Returns the doctor's details including their weekly business hours.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the doctor belongs to
/// - `doctor_id` - Doctor ID to fetch
///
/// # Returns
/// - `200 OK` - Doctor details
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Doctor not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/doctors/{doctor_id}",
    tag = DOCTOR_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved doctor", body = DoctorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctor_by_id(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, doctor_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = DoctorService::new(&state.db);

    let doctor = service.get(clinic_id, doctor_id).await?;

    Ok((StatusCode::OK, Json(doctor.into_dto())))
}

/// Update a doctor's details.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the doctor belongs to
/// - `doctor_id` - Doctor ID to update
/// - `payload` - Updated doctor data
///
/// # Returns
/// - `200 OK` - Successfully updated doctor
/// - `400 Bad Request` - Invalid doctor data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Doctor not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clinics/{clinic_id}/doctors/{doctor_id}",
    tag = DOCTOR_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    request_body = UpdateDoctorDto,
    responses(
        (status = 200, description = "Successfully updated doctor", body = DoctorDto),
        (status = 400, description = "Invalid doctor data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, doctor_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = DoctorService::new(&state.db);

    let doctor = service
        .update(
            user.id,
            UpdateDoctorParam {
                clinic_id,
                doctor_id,
                name: payload.name,
                specialty: payload.specialty,
                appointment_price_cents: payload.appointment_price_cents,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(doctor.into_dto())))
}

/// Delete a doctor.
///
/// Deleting a doctor cascades to their business hours and appointments.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the doctor belongs to
/// - `doctor_id` - Doctor ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted doctor
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Doctor not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clinics/{clinic_id}/doctors/{doctor_id}",
    tag = DOCTOR_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted doctor"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, doctor_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = DoctorService::new(&state.db);

    service.delete(user.id, clinic_id, doctor_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace a doctor's weekly business hours.
///
/// Replaces the full set of per-weekday rows in one call. Days submitted as
/// disabled are stored disabled so the editor round-trips them.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the doctor belongs to
/// - `doctor_id` - Doctor ID whose schedule to replace
/// - `payload` - The full weekly schedule
///
/// # Returns
/// - `200 OK` - Successfully updated schedule, returns the doctor
/// - `400 Bad Request` - Malformed times or start not before end
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Doctor not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clinics/{clinic_id}/doctors/{doctor_id}/business-hours",
    tag = DOCTOR_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    request_body = UpdateBusinessHoursDto,
    responses(
        (status = 200, description = "Successfully updated business hours", body = DoctorDto),
        (status = 400, description = "Invalid schedule data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_business_hours(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, doctor_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateBusinessHoursDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = DoctorService::new(&state.db);

    let params = UpdateBusinessHoursParam::from_dto(clinic_id, doctor_id, payload);

    let doctor = service.update_business_hours(user.id, params).await?;

    Ok((StatusCode::OK, Json(doctor.into_dto())))
}

/// Get a doctor's bookable slots for a day.
///
/// Computes the open slots from the doctor's business hours for that weekday
/// minus the already booked times. Each slot carries the "HH:MM:SS" UTC value
/// the booking API expects and a local "HH:MM" label for display. When
/// `appointment_id` is given, that appointment's own slot stays in the list
/// so an edit form can keep the current time selected.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the doctor belongs to
/// - `doctor_id` - Doctor ID to compute slots for
/// - `params` - The day, and optionally the appointment being edited
///
/// # Returns
/// - `200 OK` - Bookable slots, empty when the doctor does not work that day
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Doctor not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/doctors/{doctor_id}/available-slots",
    tag = DOCTOR_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("date" = String, Query, description = "Calendar day as YYYY-MM-DD"),
        ("appointment_id" = Option<i32>, Query, description = "Appointment being edited, keeps its own slot selectable")
    ),
    responses(
        (status = 200, description = "Successfully computed slots", body = Vec<SlotDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_slots(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, doctor_id)): Path<(i32, i32)>,
    Query(params): Query<AvailableSlotsParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = DoctorService::new(&state.db);

    let slots = service
        .available_slots(clinic_id, doctor_id, params.date, params.appointment_id)
        .await?;

    let slots = slots
        .into_iter()
        .map(|time| SlotDto {
            value: time.format("%H:%M:%S").to_string(),
            label: format_time_local(time),
        })
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(slots)))
}
