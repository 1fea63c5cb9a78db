use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        patient::{CreatePatientDto, PaginatedPatientsDto, PatientDto, UpdatePatientDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::patient::{CreatePatientParam, GetPatientsParam, UpdatePatientParam},
        service::patient::PatientService,
        state::AppState,
    },
};

/// Tag for grouping patient endpoints in OpenAPI documentation
pub static PATIENT_TAG: &str = "patient";

#[derive(Deserialize)]
pub struct PatientListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Case-insensitive name filter.
    pub search: Option<String>,
}

fn default_entries() -> u64 {
    10
}

/// Get paginated patients for a clinic.
///
/// Supports an optional case-insensitive `search` filter on the patient name.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to fetch patients for
/// - `params` - Pagination and search parameters
///
/// # Returns
/// - `200 OK` - Paginated list of patients
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/patients",
    tag = PATIENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("search" = Option<String>, Query, description = "Case-insensitive name filter")
    ),
    responses(
        (status = 200, description = "Successfully retrieved patients", body = PaginatedPatientsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patients(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Query(params): Query<PatientListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = PatientService::new(&state.db);

    let patients = service
        .get_paginated(GetPatientsParam {
            clinic_id,
            search: params.search,
            page: params.page,
            per_page: params.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(patients.into_dto())))
}

/// Create a new patient.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to create the patient in
/// - `payload` - Patient creation data (name, contact details, sex)
///
/// # Returns
/// - `201 Created` - Successfully created patient
/// - `400 Bad Request` - Invalid patient data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clinics/{clinic_id}/patients",
    tag = PATIENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID")
    ),
    request_body = CreatePatientDto,
    responses(
        (status = 201, description = "Successfully created patient", body = PatientDto),
        (status = 400, description = "Invalid patient data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_patient(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Json(payload): Json<CreatePatientDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = PatientService::new(&state.db);

    let params = CreatePatientParam::from_dto(clinic_id, payload);

    let patient = service.create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(patient.into_dto())))
}

/// Get a specific patient by ID.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the patient belongs to
/// - `patient_id` - Patient ID to fetch
///
/// # Returns
/// - `200 OK` - Patient details
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Patient not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/patients/{patient_id}",
    tag = PATIENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("patient_id" = i32, Path, description = "Patient ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved patient", body = PatientDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patient_by_id(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, patient_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = PatientService::new(&state.db);

    let patient = service.get(clinic_id, patient_id).await?;

    Ok((StatusCode::OK, Json(patient.into_dto())))
}

/// Update a patient's details.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the patient belongs to
/// - `patient_id` - Patient ID to update
/// - `payload` - Updated patient data
///
/// # Returns
/// - `200 OK` - Successfully updated patient
/// - `400 Bad Request` - Invalid patient data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Patient not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clinics/{clinic_id}/patients/{patient_id}",
    tag = PATIENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("patient_id" = i32, Path, description = "Patient ID")
    ),
    request_body = UpdatePatientDto,
    responses(
        (status = 200, description = "Successfully updated patient", body = PatientDto),
        (status = 400, description = "Invalid patient data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_patient(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, patient_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdatePatientDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = PatientService::new(&state.db);

    let params = UpdatePatientParam::from_dto(clinic_id, patient_id, payload);

    let patient = service.update(user.id, params).await?;

    Ok((StatusCode::OK, Json(patient.into_dto())))
}

/// Delete a patient.
///
/// Deleting a patient cascades to their medical records and appointments.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the patient belongs to
/// - `patient_id` - Patient ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted patient
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Patient not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clinics/{clinic_id}/patients/{patient_id}",
    tag = PATIENT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("patient_id" = i32, Path, description = "Patient ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted patient"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_patient(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, patient_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = PatientService::new(&state.db);

    service.delete(user.id, clinic_id, patient_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
