use crate::{client::model::error::ApiError, model::security_log::PaginatedSecurityLogsDto};

use super::helper::{get, parse_response, send_request};

/// Get paginated audit log entries for a clinic, newest first
pub async fn get_security_logs(
    clinic_id: i32,
    page: u64,
    per_page: u64,
) -> Result<PaginatedSecurityLogsDto, ApiError> {
    let url = format!(
        "/api/clinics/{}/security-logs?page={}&entries={}",
        clinic_id, page, per_page
    );

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
