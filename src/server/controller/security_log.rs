use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, security_log::PaginatedSecurityLogsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::security_log::GetSecurityLogsParam,
        service::security_log::SecurityLogService,
        state::AppState,
    },
};

/// Tag for grouping audit trail endpoints in OpenAPI documentation
pub static SECURITY_LOG_TAG: &str = "security-log";

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

/// Get a clinic's audit trail.
///
/// Returns one row per recorded data mutation attempt, newest first,
/// including failed attempts.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID whose trail to read
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated audit rows
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/security-logs",
    tag = SECURITY_LOG_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved audit rows", body = PaginatedSecurityLogsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_security_logs(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = SecurityLogService::new(&state.db);

    let logs = service
        .get_paginated(GetSecurityLogsParam {
            clinic_id,
            page: params.page,
            per_page: params.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(logs.into_dto())))
}
