use crate::{client::model::error::ApiError, model::report::RevenueReportDto};

use super::helper::{get, parse_response, send_request};

/// Get the revenue report for a date range
///
/// When `from` and `to` are omitted the server reports on the last 30 days.
pub async fn get_revenue_report(
    clinic_id: i32,
    from: Option<String>,
    to: Option<String>,
) -> Result<RevenueReportDto, ApiError> {
    let mut url = format!("/api/clinics/{}/reports/revenue", clinic_id);
    let mut params = Vec::new();
    if let Some(from) = from {
        if !from.is_empty() {
            params.push(format!("from={}", from));
        }
    }
    if let Some(to) = to {
        if !to.is_empty() {
            params.push(format!("to={}", to));
        }
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
