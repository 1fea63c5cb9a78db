use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateAppointmentDto {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub health_insurance_plan_id: Option<i32>,
    pub date: String, // Format: "YYYY-MM-DD"
    pub time: String, // Format: "HH:MM:SS" in UTC (a slot value)
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateAppointmentDto {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub health_insurance_plan_id: Option<i32>,
    pub date: String, // Format: "YYYY-MM-DD"
    pub time: String, // Format: "HH:MM:SS" in UTC (a slot value)
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AppointmentDto {
    pub id: i32,
    pub clinic_id: i32,
    pub patient_id: i32,
    pub patient_name: String,
    pub doctor_id: i32,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub health_insurance_plan_id: Option<i32>,
    pub health_insurance_plan_name: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
    pub price_cents: i32,
    pub payment_status: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AppointmentListItemDto {
    pub id: i32,
    pub patient_id: i32,
    pub patient_name: String,
    pub doctor_id: i32,
    pub doctor_name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
    pub price_cents: i32,
    pub payment_status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedAppointmentsDto {
    pub appointments: Vec<AppointmentListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
