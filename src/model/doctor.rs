use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DoctorDto {
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    pub specialty: String,
    pub appointment_price_cents: i32,
    pub business_hours: Vec<BusinessHourDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DoctorListItemDto {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub appointment_price_cents: i32,
}

/// One weekday row of a doctor's schedule. Weekday 0 is Sunday, 6 is
/// Saturday. Times are "HH:MM:SS" strings in UTC.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BusinessHourDto {
    pub weekday: i32,
    pub enabled: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateDoctorDto {
    pub name: String,
    pub specialty: String,
    pub appointment_price_cents: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateDoctorDto {
    pub name: String,
    pub specialty: String,
    pub appointment_price_cents: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateBusinessHoursDto {
    pub days: Vec<BusinessHourDto>,
}

/// A bookable slot: `value` is the "HH:MM:SS" UTC time submitted back to the
/// API, `label` the "HH:MM" UTC-3 text shown to the user.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SlotDto {
    pub value: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedDoctorsDto {
    pub doctors: Vec<DoctorListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
