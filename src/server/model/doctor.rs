//! Doctor domain models and parameters.
//!
//! Provides domain models for doctors and their weekly business hours. A doctor
//! carries both the per-weekday schedule rows and, for records created before the
//! schedule table existed, a legacy weekday-range availability window. Conversion
//! between the two representations lives in [`super::schedule`].

use chrono::{DateTime, Utc};

use crate::model::doctor::{
    BusinessHourDto, DoctorDto, DoctorListItemDto, PaginatedDoctorsDto, UpdateBusinessHoursDto,
};

/// One weekday row of a doctor's schedule.
///
/// Weekday 0 is Sunday through 6 for Saturday. Times are stored as "HH:MM:SS"
/// strings in UTC and only parsed when availability is computed, so a malformed
/// row degrades to a closed day instead of failing the whole doctor load.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessHour {
    /// Weekday this row applies to (0 = Sunday, 6 = Saturday).
    pub weekday: i32,
    /// Whether the doctor attends on this weekday.
    pub enabled: bool,
    /// Opening time as "HH:MM:SS" in UTC, None when closed.
    pub start_time: Option<String>,
    /// Closing time as "HH:MM:SS" in UTC, None when closed.
    pub end_time: Option<String>,
}

impl BusinessHour {
    /// Converts the business hour domain model to a DTO for API responses.
    pub fn into_dto(self) -> BusinessHourDto {
        BusinessHourDto {
            weekday: self.weekday,
            enabled: self.enabled,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    /// Converts an entity model to a business hour domain model.
    pub fn from_entity(entity: entity::doctor_business_hour::Model) -> Self {
        Self {
            weekday: entity.weekday,
            enabled: entity.enabled,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }
}

/// Doctor with pricing, schedule rows, and legacy availability window.
///
/// The `business_hours` vector is loaded alongside the doctor row and is empty
/// for doctors that still rely on the legacy weekday-range fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    /// Database ID of the doctor.
    pub id: i32,
    /// Clinic the doctor belongs to.
    pub clinic_id: i32,
    /// Display name of the doctor.
    pub name: String,
    /// Medical specialty shown in listings.
    pub specialty: String,
    /// Default price of an appointment in cents.
    pub appointment_price_cents: i32,
    /// Legacy availability: first attended weekday (0 = Sunday).
    pub available_from_weekday: Option<i32>,
    /// Legacy availability: last attended weekday, inclusive.
    pub available_to_weekday: Option<i32>,
    /// Legacy availability: daily opening time as "HH:MM:SS" in UTC.
    pub available_from_time: Option<String>,
    /// Legacy availability: daily closing time as "HH:MM:SS" in UTC.
    pub available_to_time: Option<String>,
    /// Per-weekday schedule rows, empty when only legacy fields are set.
    pub business_hours: Vec<BusinessHour>,
    /// When the doctor was created.
    pub created_at: DateTime<Utc>,
    /// When the doctor was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Doctor {
    /// Converts the doctor domain model to a DTO for API responses.
    pub fn into_dto(self) -> DoctorDto {
        DoctorDto {
            id: self.id,
            clinic_id: self.clinic_id,
            name: self.name,
            specialty: self.specialty,
            appointment_price_cents: self.appointment_price_cents,
            business_hours: self
                .business_hours
                .into_iter()
                .map(|h| h.into_dto())
                .collect(),
        }
    }

    /// Converts the doctor domain model to a listing DTO without schedule rows.
    pub fn into_list_item_dto(self) -> DoctorListItemDto {
        DoctorListItemDto {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
            appointment_price_cents: self.appointment_price_cents,
        }
    }

    /// Converts an entity model and its schedule rows to a doctor domain model.
    ///
    /// # Arguments
    /// - `entity` - The doctor entity model from the database
    /// - `hours` - The doctor's schedule rows, empty for legacy records
    pub fn from_entity(
        entity: entity::doctor::Model,
        hours: Vec<entity::doctor_business_hour::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            name: entity.name,
            specialty: entity.specialty,
            appointment_price_cents: entity.appointment_price_cents,
            available_from_weekday: entity.available_from_weekday,
            available_to_weekday: entity.available_to_weekday,
            available_from_time: entity.available_from_time,
            available_to_time: entity.available_to_time,
            business_hours: hours.into_iter().map(BusinessHour::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a doctor.
#[derive(Debug, Clone)]
pub struct CreateDoctorParam {
    /// Clinic the doctor belongs to.
    pub clinic_id: i32,
    /// Display name of the doctor.
    pub name: String,
    /// Medical specialty.
    pub specialty: String,
    /// Default price of an appointment in cents.
    pub appointment_price_cents: i32,
}

/// Parameters for updating a doctor's details.
#[derive(Debug, Clone)]
pub struct UpdateDoctorParam {
    /// Clinic the doctor belongs to.
    pub clinic_id: i32,
    /// Database ID of the doctor to update.
    pub doctor_id: i32,
    /// New display name.
    pub name: String,
    /// New medical specialty.
    pub specialty: String,
    /// New default appointment price in cents.
    pub appointment_price_cents: i32,
}

/// Parameters for replacing a doctor's weekly schedule.
///
/// Replaces all existing schedule rows for the doctor and clears the legacy
/// availability window, completing the migration for that record.
#[derive(Debug, Clone)]
pub struct UpdateBusinessHoursParam {
    /// Clinic the doctor belongs to.
    pub clinic_id: i32,
    /// Database ID of the doctor.
    pub doctor_id: i32,
    /// New schedule rows, one per submitted weekday.
    pub days: Vec<BusinessHour>,
}

impl UpdateBusinessHoursParam {
    /// Creates update parameters from the schedule DTO.
    pub fn from_dto(clinic_id: i32, doctor_id: i32, dto: UpdateBusinessHoursDto) -> Self {
        Self {
            clinic_id,
            doctor_id,
            days: dto
                .days
                .into_iter()
                .map(|d| BusinessHour {
                    weekday: d.weekday,
                    enabled: d.enabled,
                    start_time: d.start_time,
                    end_time: d.end_time,
                })
                .collect(),
        }
    }
}

/// Parameters for paginated doctor queries.
#[derive(Debug, Clone)]
pub struct GetDoctorsParam {
    /// Clinic whose doctors to list.
    pub clinic_id: i32,
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of doctors to return per page.
    pub per_page: u64,
}

/// Paginated collection of doctors with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDoctors {
    /// Doctors for this page.
    pub doctors: Vec<Doctor>,
    /// Total number of doctors across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of doctors per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedDoctors {
    /// Converts the paginated doctors domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedDoctorsDto {
        PaginatedDoctorsDto {
            doctors: self
                .doctors
                .into_iter()
                .map(|d| d.into_list_item_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
