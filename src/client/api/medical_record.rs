use crate::{
    client::model::error::ApiError,
    model::medical_record::{CreateMedicalRecordDto, MedicalRecordDto, UpdateMedicalRecordDto},
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Get a patient's medical records, newest first
pub async fn get_medical_records(
    clinic_id: i32,
    patient_id: i32,
) -> Result<Vec<MedicalRecordDto>, ApiError> {
    let url = format!("/api/clinics/{}/patients/{}/records", clinic_id, patient_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Add a medical record to a patient's history
pub async fn create_medical_record(
    clinic_id: i32,
    patient_id: i32,
    appointment_id: Option<i32>,
    content: String,
) -> Result<MedicalRecordDto, ApiError> {
    let url = format!("/api/clinics/{}/patients/{}/records", clinic_id, patient_id);
    let payload = CreateMedicalRecordDto {
        appointment_id,
        content,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Rewrite the content of a medical record
pub async fn update_medical_record(
    clinic_id: i32,
    record_id: i32,
    content: String,
) -> Result<MedicalRecordDto, ApiError> {
    let url = format!("/api/clinics/{}/records/{}", clinic_id, record_id);
    let payload = UpdateMedicalRecordDto { content };
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Delete a medical record
pub async fn delete_medical_record(clinic_id: i32, record_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/clinics/{}/records/{}", clinic_id, record_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
