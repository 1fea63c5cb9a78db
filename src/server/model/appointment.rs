//! Appointment domain models and parameters.
//!
//! Appointments are stored with a single UTC timestamp; the date and slot time
//! submitted by clients are combined at the parameter boundary. Domain models
//! are enriched with patient, doctor, and plan names at the repository boundary
//! so listings never trigger per-row lookups.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{
    model::appointment::{
        AppointmentDto, AppointmentListItemDto, CreateAppointmentDto, PaginatedAppointmentsDto,
        UpdateAppointmentDto,
    },
    server::{
        error::AppError,
        model::payment::PaymentStatus,
        util::parse::{parse_date, parse_time_of_day},
    },
};

/// Appointment enriched with the names of the people and plan involved.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    /// Database ID of the appointment.
    pub id: i32,
    /// Clinic the appointment belongs to.
    pub clinic_id: i32,
    /// Patient being seen.
    pub patient_id: i32,
    /// Name of the patient, joined in for display.
    pub patient_name: String,
    /// Doctor attending the appointment.
    pub doctor_id: i32,
    /// Name of the doctor, joined in for display.
    pub doctor_name: String,
    /// Specialty of the doctor, joined in for display.
    pub doctor_specialty: String,
    /// Insurance plan covering the appointment, None for private patients.
    pub health_insurance_plan_id: Option<i32>,
    /// Name of the covering plan, joined in for display.
    pub health_insurance_plan_name: Option<String>,
    /// Scheduled start of the appointment in UTC.
    pub date: DateTime<Utc>,
    /// Price agreed at booking time, in cents.
    pub price_cents: i32,
    /// Settlement status of the appointment's payment aggregate.
    pub payment_status: PaymentStatus,
    /// When the reminder email was sent, None until the scheduler sends one.
    pub reminder_sent_at: Option<DateTime<Utc>>,
    /// When the appointment was booked.
    pub created_at: DateTime<Utc>,
    /// When the appointment was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Converts the appointment domain model to a DTO for API responses.
    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            clinic_id: self.clinic_id,
            patient_id: self.patient_id,
            patient_name: self.patient_name,
            doctor_id: self.doctor_id,
            doctor_name: self.doctor_name,
            doctor_specialty: self.doctor_specialty,
            health_insurance_plan_id: self.health_insurance_plan_id,
            health_insurance_plan_name: self.health_insurance_plan_name,
            date: self.date,
            price_cents: self.price_cents,
            payment_status: self.payment_status.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts the appointment domain model to a listing DTO.
    pub fn into_list_item_dto(self) -> AppointmentListItemDto {
        AppointmentListItemDto {
            id: self.id,
            patient_id: self.patient_id,
            patient_name: self.patient_name,
            doctor_id: self.doctor_id,
            doctor_name: self.doctor_name,
            date: self.date,
            price_cents: self.price_cents,
            payment_status: self.payment_status.as_str().to_string(),
        }
    }

    /// Composes an entity model and its joined display data into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The appointment entity model from the database
    /// - `patient_name` - Name of the patient being seen
    /// - `doctor_name` - Name of the attending doctor
    /// - `doctor_specialty` - Specialty of the attending doctor
    /// - `health_insurance_plan_name` - Name of the covering plan, if any
    /// - `payment_status` - Settlement status from the payment aggregate
    pub fn from_entity(
        entity: entity::appointment::Model,
        patient_name: String,
        doctor_name: String,
        doctor_specialty: String,
        health_insurance_plan_name: Option<String>,
        payment_status: PaymentStatus,
    ) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            patient_id: entity.patient_id,
            patient_name,
            doctor_id: entity.doctor_id,
            doctor_name,
            doctor_specialty,
            health_insurance_plan_id: entity.health_insurance_plan_id,
            health_insurance_plan_name,
            date: entity.date,
            price_cents: entity.price_cents,
            payment_status,
            reminder_sent_at: entity.reminder_sent_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for booking an appointment.
///
/// The slot is carried as separate date and time-of-day values because slot
/// validation needs the date to resolve the doctor's schedule before the two
/// are combined into the stored UTC timestamp.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParam {
    /// Clinic the appointment belongs to.
    pub clinic_id: i32,
    /// Patient being seen.
    pub patient_id: i32,
    /// Doctor attending the appointment.
    pub doctor_id: i32,
    /// Insurance plan covering the appointment, None for private patients.
    pub health_insurance_plan_id: Option<i32>,
    /// Calendar day of the appointment.
    pub date: NaiveDate,
    /// Slot start time in UTC.
    pub time: NaiveTime,
}

impl CreateAppointmentParam {
    /// Creates booking parameters from the creation DTO.
    ///
    /// # Returns
    /// - `Ok(CreateAppointmentParam)` - The parsed parameters
    /// - `Err(AppError::BadRequest)` - The date or time string was unreadable
    pub fn from_dto(clinic_id: i32, dto: CreateAppointmentDto) -> Result<Self, AppError> {
        let date = parse_date(&dto.date)
            .ok_or_else(|| AppError::BadRequest("Invalid date, expected YYYY-MM-DD.".to_string()))?;
        let time = parse_time_of_day(&dto.time)
            .ok_or_else(|| AppError::BadRequest("Invalid time, expected HH:MM:SS.".to_string()))?;

        Ok(Self {
            clinic_id,
            patient_id: dto.patient_id,
            doctor_id: dto.doctor_id,
            health_insurance_plan_id: dto.health_insurance_plan_id,
            date,
            time,
        })
    }
}

/// Parameters for rescheduling or editing an appointment.
#[derive(Debug, Clone)]
pub struct UpdateAppointmentParam {
    /// Clinic the appointment belongs to.
    pub clinic_id: i32,
    /// Database ID of the appointment being edited.
    pub appointment_id: i32,
    /// Patient being seen.
    pub patient_id: i32,
    /// Doctor attending the appointment.
    pub doctor_id: i32,
    /// Insurance plan covering the appointment, None for private patients.
    pub health_insurance_plan_id: Option<i32>,
    /// Calendar day of the appointment.
    pub date: NaiveDate,
    /// Slot start time in UTC.
    pub time: NaiveTime,
}

impl UpdateAppointmentParam {
    /// Creates edit parameters from the update DTO.
    ///
    /// # Returns
    /// - `Ok(UpdateAppointmentParam)` - The parsed parameters
    /// - `Err(AppError::BadRequest)` - The date or time string was unreadable
    pub fn from_dto(
        clinic_id: i32,
        appointment_id: i32,
        dto: UpdateAppointmentDto,
    ) -> Result<Self, AppError> {
        let date = parse_date(&dto.date)
            .ok_or_else(|| AppError::BadRequest("Invalid date, expected YYYY-MM-DD.".to_string()))?;
        let time = parse_time_of_day(&dto.time)
            .ok_or_else(|| AppError::BadRequest("Invalid time, expected HH:MM:SS.".to_string()))?;

        Ok(Self {
            clinic_id,
            appointment_id,
            patient_id: dto.patient_id,
            doctor_id: dto.doctor_id,
            health_insurance_plan_id: dto.health_insurance_plan_id,
            date,
            time,
        })
    }
}

/// Parameters for paginated appointment queries.
#[derive(Debug, Clone)]
pub struct GetAppointmentsParam {
    /// Clinic whose appointments to list.
    pub clinic_id: i32,
    /// Restrict to one doctor, None lists every doctor.
    pub doctor_id: Option<i32>,
    /// Earliest calendar day to include, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest calendar day to include, inclusive.
    pub to: Option<NaiveDate>,
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of appointments to return per page.
    pub per_page: u64,
}

/// Paginated collection of appointments with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAppointments {
    /// Appointments for this page, ordered by date.
    pub appointments: Vec<Appointment>,
    /// Total number of matching appointments across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of appointments per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedAppointments {
    /// Converts the paginated appointments domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedAppointmentsDto {
        PaginatedAppointmentsDto {
            appointments: self
                .appointments
                .into_iter()
                .map(|a| a.into_list_item_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
