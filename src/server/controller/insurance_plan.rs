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
        insurance::{
            CreateHealthInsurancePlanDto, HealthInsurancePlanDto, UpdateHealthInsurancePlanDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::insurance::{CreateHealthInsurancePlanParam, UpdateHealthInsurancePlanParam},
        service::insurance_plan::HealthInsurancePlanService,
        state::AppState,
    },
};

/// Tag for grouping insurance plan endpoints in OpenAPI documentation
pub static INSURANCE_PLAN_TAG: &str = "insurance-plan";

/// Get all insurance plans for a clinic.
///
/// Clinics carry few plans, so the list is returned unpaginated, ordered by
/// name.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to fetch plans for
///
/// # Returns
/// - `200 OK` - List of insurance plans
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/insurance-plans",
    tag = INSURANCE_PLAN_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved insurance plans", body = Vec<HealthInsurancePlanDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insurance_plans(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = HealthInsurancePlanService::new(&state.db);

    let plans = service.get_all(clinic_id).await?;

    Ok((
        StatusCode::OK,
        Json(plans.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a new insurance plan.
///
/// The plan's base price overrides the doctor's price when an appointment is
/// booked under the plan.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to create the plan in
/// - `payload` - Plan creation data (name and base price)
///
/// # Returns
/// - `201 Created` - Successfully created insurance plan
/// - `400 Bad Request` - Invalid plan data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clinics/{clinic_id}/insurance-plans",
    tag = INSURANCE_PLAN_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID")
    ),
    request_body = CreateHealthInsurancePlanDto,
    responses(
        (status = 201, description = "Successfully created insurance plan", body = HealthInsurancePlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_insurance_plan(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Json(payload): Json<CreateHealthInsurancePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = HealthInsurancePlanService::new(&state.db);

    let params = CreateHealthInsurancePlanParam::from_dto(clinic_id, payload);

    let plan = service.create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

/// Update an insurance plan.
///
/// Renaming or repricing a plan only affects future bookings; existing
/// appointment payments keep the price they were opened with.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the plan belongs to
/// - `plan_id` - Plan ID to update
/// - `payload` - Updated plan data
///
/// # Returns
/// - `200 OK` - Successfully updated insurance plan
/// - `400 Bad Request` - Invalid plan data
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Plan not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clinics/{clinic_id}/insurance-plans/{plan_id}",
    tag = INSURANCE_PLAN_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("plan_id" = i32, Path, description = "Insurance plan ID")
    ),
    request_body = UpdateHealthInsurancePlanDto,
    responses(
        (status = 200, description = "Successfully updated insurance plan", body = HealthInsurancePlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_insurance_plan(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, plan_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateHealthInsurancePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = HealthInsurancePlanService::new(&state.db);

    let params = UpdateHealthInsurancePlanParam::from_dto(clinic_id, plan_id, payload);

    let plan = service.update(user.id, params).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Delete an insurance plan.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID the plan belongs to
/// - `plan_id` - Plan ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted insurance plan
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `404 Not Found` - Plan not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clinics/{clinic_id}/insurance-plans/{plan_id}",
    tag = INSURANCE_PLAN_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("plan_id" = i32, Path, description = "Insurance plan ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted insurance plan"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_insurance_plan(
    State(state): State<AppState>,
    session: Session,
    Path((clinic_id, plan_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = HealthInsurancePlanService::new(&state.db);

    service.delete(user.id, clinic_id, plan_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
