use crate::{
    client::model::error::ApiError,
    model::appointment::{
        AppointmentDto, CreateAppointmentDto, PaginatedAppointmentsDto, UpdateAppointmentDto,
    },
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Get paginated appointments for a clinic
///
/// `from` and `to` are inclusive calendar days formatted as YYYY-MM-DD.
pub async fn get_appointments(
    clinic_id: i32,
    page: u64,
    per_page: u64,
    doctor_id: Option<i32>,
    from: Option<String>,
    to: Option<String>,
) -> Result<PaginatedAppointmentsDto, ApiError> {
    let mut url = format!(
        "/api/clinics/{}/appointments?page={}&entries={}",
        clinic_id, page, per_page
    );
    if let Some(doctor_id) = doctor_id {
        url.push_str(&format!("&doctor_id={}", doctor_id));
    }
    if let Some(from) = from {
        url.push_str(&format!("&from={}", from));
    }
    if let Some(to) = to {
        url.push_str(&format!("&to={}", to));
    }

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Book an appointment in one of the doctor's open slots
pub async fn create_appointment(
    clinic_id: i32,
    patient_id: i32,
    doctor_id: i32,
    health_insurance_plan_id: Option<i32>,
    date: String,
    time: String,
) -> Result<AppointmentDto, ApiError> {
    let url = format!("/api/clinics/{}/appointments", clinic_id);
    let payload = CreateAppointmentDto {
        patient_id,
        doctor_id,
        health_insurance_plan_id,
        date,
        time,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Get a single appointment with patient, doctor and payment details
pub async fn get_appointment_by_id(
    clinic_id: i32,
    appointment_id: i32,
) -> Result<AppointmentDto, ApiError> {
    let url = format!("/api/clinics/{}/appointments/{}", clinic_id, appointment_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Reschedule or reassign an appointment
pub async fn update_appointment(
    clinic_id: i32,
    appointment_id: i32,
    patient_id: i32,
    doctor_id: i32,
    health_insurance_plan_id: Option<i32>,
    date: String,
    time: String,
) -> Result<AppointmentDto, ApiError> {
    let url = format!("/api/clinics/{}/appointments/{}", clinic_id, appointment_id);
    let payload = UpdateAppointmentDto {
        patient_id,
        doctor_id,
        health_insurance_plan_id,
        date,
        time,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Cancel an appointment
pub async fn delete_appointment(clinic_id: i32, appointment_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/clinics/{}/appointments/{}", clinic_id, appointment_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// Get the taken times of a doctor on a given day, as HH:MM:SS strings
pub async fn get_booked_times(
    clinic_id: i32,
    doctor_id: i32,
    date: String,
) -> Result<Vec<String>, ApiError> {
    let url = format!(
        "/api/clinics/{}/appointments/booked?doctor_id={}&date={}",
        clinic_id, doctor_id, date
    );

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
