use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, report::RevenueReportDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::report::GetRevenueReportParam,
        service::{
            export::{export_filename, revenue_report_csv, revenue_report_pdf},
            report::ReportService,
        },
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Query parameters for the revenue report endpoints.
#[derive(Deserialize)]
pub struct ReportParams {
    /// First local day to include, inclusive. Defaults to 29 days before `to`.
    pub from: Option<NaiveDate>,
    /// Last local day to include, inclusive. Defaults to today.
    pub to: Option<NaiveDate>,
}

/// Get the revenue report for a clinic.
///
/// Bundles headline totals, a per-day revenue series, a payment-method
/// breakdown, the top doctors by revenue and the most recent transactions
/// for the requested period. Without explicit bounds the report covers the
/// trailing thirty days ending today, in clinic local time.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to report on
/// - `params` - Optional period bounds (from and to, as YYYY-MM-DD)
///
/// # Returns
/// - `200 OK` - The report bundle
/// - `400 Bad Request` - Period start after its end
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/reports/revenue",
    tag = REPORT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("from" = Option<String>, Query, description = "First day to include, as YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Last day to include, as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Successfully built revenue report", body = RevenueReportDto),
        (status = 400, description = "Invalid report period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_revenue_report(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Query(params): Query<ReportParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = ReportService::new(&state.db);

    let report = service
        .get_revenue_report(GetRevenueReportParam {
            clinic_id,
            from: params.from,
            to: params.to,
        })
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Download the revenue report as a CSV spreadsheet.
///
/// Renders the same bundle as the JSON endpoint into CSV sections separated
/// by blank lines, served as a file download.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to report on
/// - `params` - Optional period bounds (from and to, as YYYY-MM-DD)
///
/// # Returns
/// - `200 OK` - The CSV file as an attachment
/// - `400 Bad Request` - Period start after its end
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database or rendering error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/reports/revenue/export.csv",
    tag = REPORT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("from" = Option<String>, Query, description = "First day to include, as YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Last day to include, as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "CSV rendering of the revenue report"),
        (status = 400, description = "Invalid report period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_revenue_report_csv(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Query(params): Query<ReportParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = ReportService::new(&state.db);

    let report = service
        .get_revenue_report(GetRevenueReportParam {
            clinic_id,
            from: params.from,
            to: params.to,
        })
        .await?;

    let filename = export_filename(&report, "csv");
    let body = revenue_report_csv(&report)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// Download the revenue report as a PDF document.
///
/// Renders the report onto A4 pages with the builtin Helvetica fonts, served
/// as a file download.
///
/// # Access Control
/// - `ClinicMember` - Only members of the clinic
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `clinic_id` - Clinic ID to report on
/// - `params` - Optional period bounds (from and to, as YYYY-MM-DD)
///
/// # Returns
/// - `200 OK` - The PDF file as an attachment
/// - `400 Bad Request` - Period start after its end
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a member of the clinic
/// - `500 Internal Server Error` - Database or rendering error
#[utoipa::path(
    get,
    path = "/api/clinics/{clinic_id}/reports/revenue/export.pdf",
    tag = REPORT_TAG,
    params(
        ("clinic_id" = i32, Path, description = "Clinic ID"),
        ("from" = Option<String>, Query, description = "First day to include, as YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Last day to include, as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "PDF rendering of the revenue report"),
        (status = 400, description = "Invalid report period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member of the clinic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_revenue_report_pdf(
    State(state): State<AppState>,
    session: Session,
    Path(clinic_id): Path<i32>,
    Query(params): Query<ReportParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ClinicMember(clinic_id)])
        .await?;

    let service = ReportService::new(&state.db);

    let report = service
        .get_revenue_report(GetRevenueReportParam {
            clinic_id,
            from: params.from,
            to: params.to,
        })
        .await?;

    let filename = export_filename(&report, "pdf");
    let body = revenue_report_pdf(&report)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}
