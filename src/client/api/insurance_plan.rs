use crate::{
    client::model::error::ApiError,
    model::insurance::{
        CreateHealthInsurancePlanDto, HealthInsurancePlanDto, UpdateHealthInsurancePlanDto,
    },
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Get all insurance plans accepted by a clinic
pub async fn get_insurance_plans(clinic_id: i32) -> Result<Vec<HealthInsurancePlanDto>, ApiError> {
    let url = format!("/api/clinics/{}/insurance-plans", clinic_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Add an insurance plan to a clinic
pub async fn create_insurance_plan(
    clinic_id: i32,
    name: String,
    base_price_cents: i32,
) -> Result<HealthInsurancePlanDto, ApiError> {
    let url = format!("/api/clinics/{}/insurance-plans", clinic_id);
    let payload = CreateHealthInsurancePlanDto {
        name,
        base_price_cents,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Update an insurance plan's name or negotiated price
pub async fn update_insurance_plan(
    clinic_id: i32,
    plan_id: i32,
    name: String,
    base_price_cents: i32,
) -> Result<HealthInsurancePlanDto, ApiError> {
    let url = format!("/api/clinics/{}/insurance-plans/{}", clinic_id, plan_id);
    let payload = UpdateHealthInsurancePlanDto {
        name,
        base_price_cents,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Remove an insurance plan from a clinic
pub async fn delete_insurance_plan(clinic_id: i32, plan_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/clinics/{}/insurance-plans/{}", clinic_id, plan_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
