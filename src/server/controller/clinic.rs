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
        clinic::{AddClinicMemberDto, ClinicDto, ClinicMemberDto, CreateClinicDto, UpdateClinicDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::clinic::{AddClinicMemberParam, CreateClinicParam, UpdateClinicParam},
        service::clinic::ClinicService,
        state::AppState,
    },
};

/// Tag for grouping clinic endpoints in OpenAPI documentation
pub static CLINIC_TAG: &str = "clinic";

/// Get the clinics the current user belongs to.
///
/// Returns every clinic the session user has a membership row for, ordered
/// by name. The client uses this to populate the clinic switcher.
///
/// # Access Control
/// - Any logged-in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - List of the user's clinics
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics",
    tag = CLINIC_TAG,
    responses(
        (status = 200, description = "Successfully retrieved clinics", body = Vec<ClinicDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clinics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ClinicService::new(&state.db);

    let clinics = service.get_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(clinics.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a new clinic.
///
/// Creates a clinic with the given name and makes the creating user its first
/// member.
///
/// # Access Control
/// - Any logged-in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Clinic creation data (name)
///
/// # Returns
/// - `201 Created` - Successfully created clinic
/// - `400 Bad Request` - Invalid clinic data
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clinics",
    tag = CLINIC_TAG,
    request_body = CreateClinicDto,
    responses(
        (status = 201, description = "Successfully created clinic", body = ClinicDto),
        (status = 400, description = "Invalid clinic data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_clinic(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClinicDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ClinicService::new(&state.db);

    let clinic = service
        .create(user.id, CreateClinicParam { name: payload.name })
        .await?;

    Ok((StatusCode::CREATED, Json(clinic.into_dto())))
}

/// Get a clinic's settings.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to fetch
///
/// # Returns
/// - `200 OK` - Clinic details
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Clinic not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}",
    tag = CLINIC_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved clinic", body = ClinicDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Clinic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clinic(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = ClinicService::new(&state.db);

    let clinic = service.get(clinic_id).await?;

    Ok((StatusCode::OK, Json(clinic.into_dto())))
}

/// Update a clinic's settings.
///
/// Currently the only editable setting is the display name.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to update
/// - `payload` - Updated clinic data (name)
///
/// # Returns
/// - `200 OK` - Successfully updated clinic
/// - `400 Bad Request` - Invalid clinic data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Clinic not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clinics/{clinic_id}",
    tag = CLINIC_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID")
    ),
    request_body = UpdateClinicDto,
    responses(
        (status = 200, description = "Successfully updated clinic", body = ClinicDto),
        (status = 400, description = "Invalid clinic data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Clinic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_clinic(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Json(payload): Json<UpdateClinicDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = ClinicService::new(&state.db);

    let clinic = service
        .update(
            user.id,
            UpdateClinicParam {
                clinic_id,
                name: payload.name,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(clinic.into_dto())))
}

/// Get a clinic's member list.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to list members for
///
/// # Returns
/// - `200 OK` - List of clinic members
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/members",
    tag = CLINIC_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<ClinicMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clinic_members(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = ClinicService::new(&state.db);

    let members = service.get_members(clinic_id).await?;

    Ok((
        StatusCode::OK,
        Json(members.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Add a member to a clinic.
///
/// Looks the user up by their login email and creates a membership row.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to add the member to
/// - `payload` - Member data (email of an existing user)
///
/// # Returns
/// - `201 Created` - Successfully added member
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - No user with the given email
/// - `409 Conflict` - User is already a member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clinics/{clinic_id}/members",
    tag = CLINIC_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID")
    ),
    request_body = AddClinicMemberDto,
    responses(
        (status = 201, description = "Successfully added member", body = ClinicMemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "No user with the given email", body = ErrorDto),
        (status = 409, description = "User is already a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_clinic_member(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Json(payload): Json<AddClinicMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = ClinicService::new(&state.db);

    let member = service
        .add_member(
            user.id,
            AddClinicMemberParam {
                clinic_id,
                email: payload.email,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}
