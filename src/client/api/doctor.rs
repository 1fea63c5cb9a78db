use crate::{
    client::model::error::ApiError,
    model::doctor::{
        BusinessHourDto, CreateDoctorDto, DoctorDto, PaginatedDoctorsDto, SlotDto,
        UpdateBusinessHoursDto, UpdateDoctorDto,
    },
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Get paginated doctors for a clinic
pub async fn get_doctors(
    clinic_id: i32,
    page: u64,
    per_page: u64,
) -> Result<PaginatedDoctorsDto, ApiError> {
    let url = format!(
        "/api/clinics/{}/doctors?page={}&entries={}",
        clinic_id, page, per_page
    );

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Create a new doctor
pub async fn create_doctor(
    clinic_id: i32,
    name: String,
    specialty: String,
    appointment_price_cents: i32,
) -> Result<DoctorDto, ApiError> {
    let url = format!("/api/clinics/{}/doctors", clinic_id);
    let payload = CreateDoctorDto {
        name,
        specialty,
        appointment_price_cents,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Get a single doctor with their weekly schedule
pub async fn get_doctor_by_id(clinic_id: i32, doctor_id: i32) -> Result<DoctorDto, ApiError> {
    let url = format!("/api/clinics/{}/doctors/{}", clinic_id, doctor_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Update a doctor's profile
pub async fn update_doctor(
    clinic_id: i32,
    doctor_id: i32,
    name: String,
    specialty: String,
    appointment_price_cents: i32,
) -> Result<DoctorDto, ApiError> {
    let url = format!("/api/clinics/{}/doctors/{}", clinic_id, doctor_id);
    let payload = UpdateDoctorDto {
        name,
        specialty,
        appointment_price_cents,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Delete a doctor
pub async fn delete_doctor(clinic_id: i32, doctor_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/clinics/{}/doctors/{}", clinic_id, doctor_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// Replace a doctor's weekly schedule
pub async fn update_business_hours(
    clinic_id: i32,
    doctor_id: i32,
    days: Vec<BusinessHourDto>,
) -> Result<DoctorDto, ApiError> {
    let url = format!(
        "/api/clinics/{}/doctors/{}/business-hours",
        clinic_id, doctor_id
    );
    let payload = UpdateBusinessHoursDto { days };
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Get the open slots of a doctor on a given day
///
/// Pass `appointment_id` when rescheduling so the appointment's current slot
/// stays selectable.
pub async fn get_available_slots(
    clinic_id: i32,
    doctor_id: i32,
    date: String,
    appointment_id: Option<i32>,
) -> Result<Vec<SlotDto>, ApiError> {
    let mut url = format!(
        "/api/clinics/{}/doctors/{}/available-slots?date={}",
        clinic_id, doctor_id, date
    );
    if let Some(id) = appointment_id {
        url.push_str(&format!("&appointment_id={}", id));
    }

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
