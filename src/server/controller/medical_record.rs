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
        medical_record::{CreateMedicalRecordDto, MedicalRecordDto, UpdateMedicalRecordDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::medical_record::{CreateMedicalRecordParam, UpdateMedicalRecordParam},
        service::medical_record::MedicalRecordService,
        state::AppState,
    },
};

/// Tag for grouping medical record endpoints in OpenAPI documentation
pub static MEDICAL_RECORD_TAG: &str = "medical-record";

/// Get a patient's medical records.
///
/// Returns every record for the patient, newest first. Record content is
/// markdown rendered by the client.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the patient belongs to
/// - `patient_id` - Patient whose records to fetch
///
/// # Returns
/// - `200 OK` - List of medical records
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Patient not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/patients/{patient_id}/records",
    tag = MEDICAL_RECORD_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("patient_id" = i32, Path, description = "Patient ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved records", body = Vec<MedicalRecordDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_medical_records(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, patient_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = MedicalRecordService::new(&state.db);

    let records = service.get_for_patient(clinic_id, patient_id).await?;

    Ok((
        StatusCode::OK,
        Json(records.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a medical record for a patient.
///
/// Optionally links the record to one of the patient's appointments.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the patient belongs to
/// - `patient_id` - Patient to attach the record to
/// - `payload` - Record data (markdown content, optional appointment link)
///
/// # Returns
/// - `201 Created` - Successfully created record
/// - `400 Bad Request` - Empty content or an appointment from another patient
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Patient not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clinics/{clinic_id}/patients/{patient_id}/records",
    tag = MEDICAL_RECORD_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("patient_id" = i32, Path, description = "Patient ID")
    ),
    request_body = CreateMedicalRecordDto,
    responses(
        (status = 201, description = "Successfully created record", body = MedicalRecordDto),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_medical_record(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, patient_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateMedicalRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = MedicalRecordService::new(&state.db);

    let params = CreateMedicalRecordParam::from_dto(clinic_id, patient_id, payload);

    let record = service.create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// Update a medical record's content.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the record belongs to
/// - `record_id` - Record ID to update
/// - `payload` - Updated markdown content
///
/// # Returns
/// - `200 OK` - Successfully updated record
/// - `400 Bad Request` - Empty content
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Record not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clinics/{clinic_id}/records/{record_id}",
    tag = MEDICAL_RECORD_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("record_id" = i32, Path, description = "Medical record ID")
    ),
    request_body = UpdateMedicalRecordDto,
    responses(
        (status = 200, description = "Successfully updated record", body = MedicalRecordDto),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_medical_record(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, record_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateMedicalRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = MedicalRecordService::new(&state.db);

    let params = UpdateMedicalRecordParam::from_dto(clinic_id, record_id, payload);

    let record = service.update(user.id, params).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Delete a medical record.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the record belongs to
/// - `record_id` - Record ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted record
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Record not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clinics/{clinic_id}/records/{record_id}",
    tag = MEDICAL_RECORD_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("record_id" = i32, Path, description = "Medical record ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted record"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_medical_record(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, record_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = MedicalRecordService::new(&state.db);

    service.delete(user.id, clinic_id, record_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
