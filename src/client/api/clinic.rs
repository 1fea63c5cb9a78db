use crate::{
    client::model::error::ApiError,
    model::clinic::{
        AddClinicMemberDto, ClinicDto, ClinicMemberDto, CreateClinicDto, UpdateClinicDto,
    },
};

use super::helper::{get, parse_response, post, put, send_request, serialize_json};

/// Get the clinics the logged in user is a member of
pub async fn get_clinics() -> Result<Vec<ClinicDto>, ApiError> {
    let response = send_request(get("/api/clinics")).await?;
    parse_response(response).await
}

/// Create a new clinic with the current user as its first member
pub async fn create_clinic(name: String) -> Result<ClinicDto, ApiError> {
    let payload = CreateClinicDto { name };
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/clinics").body(body)).await?;
    parse_response(response).await
}

/// Get a single clinic
pub async fn get_clinic(clinic_id: i32) -> Result<ClinicDto, ApiError> {
    let url = format!("/api/clinics/{}", clinic_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Rename a clinic
pub async fn update_clinic(clinic_id: i32, name: String) -> Result<ClinicDto, ApiError> {
    let url = format!("/api/clinics/{}", clinic_id);
    let payload = UpdateClinicDto { name };
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Get the members of a clinic
pub async fn get_clinic_members(clinic_id: i32) -> Result<Vec<ClinicMemberDto>, ApiError> {
    let url = format!("/api/clinics/{}/members", clinic_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Add a registered user to a clinic by email
pub async fn add_clinic_member(clinic_id: i32, email: String) -> Result<ClinicMemberDto, ApiError> {
    let url = format!("/api/clinics/{}/members", clinic_id);
    let payload = AddClinicMemberDto { email };
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}
