use crate::{
    client::model::error::ApiError,
    model::patient::{CreatePatientDto, PaginatedPatientsDto, PatientDto, UpdatePatientDto},
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Get paginated patients for a clinic, optionally filtered by name
pub async fn get_patients(
    clinic_id: i32,
    page: u64,
    per_page: u64,
    search: Option<String>,
) -> Result<PaginatedPatientsDto, ApiError> {
    let mut url = format!(
        "/api/clinics/{}/patients?page={}&entries={}",
        clinic_id, page, per_page
    );
    if let Some(search) = search {
        if !search.is_empty() {
            url.push_str(&format!("&search={}", search));
        }
    }

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Register a new patient
pub async fn create_patient(
    clinic_id: i32,
    name: String,
    email: String,
    phone_number: String,
    sex: String,
) -> Result<PatientDto, ApiError> {
    let url = format!("/api/clinics/{}/patients", clinic_id);
    let payload = CreatePatientDto {
        name,
        email,
        phone_number,
        sex,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Get a single patient
pub async fn get_patient_by_id(clinic_id: i32, patient_id: i32) -> Result<PatientDto, ApiError> {
    let url = format!("/api/clinics/{}/patients/{}", clinic_id, patient_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Update a patient's contact details
pub async fn update_patient(
    clinic_id: i32,
    patient_id: i32,
    name: String,
    email: String,
    phone_number: String,
    sex: String,
) -> Result<PatientDto, ApiError> {
    let url = format!("/api/clinics/{}/patients/{}", clinic_id, patient_id);
    let payload = UpdatePatientDto {
        name,
        email,
        phone_number,
        sex,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Delete a patient along with their appointments and records
pub async fn delete_patient(clinic_id: i32, patient_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/clinics/{}/patients/{}", clinic_id, patient_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
