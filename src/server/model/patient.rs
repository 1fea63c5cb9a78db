//! Patient domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::patient::{
    CreatePatientDto, PaginatedPatientsDto, PatientDto, UpdatePatientDto,
};

/// Patient record with contact details.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    /// Database ID of the patient.
    pub id: i32,
    /// Clinic the patient belongs to.
    pub clinic_id: i32,
    /// Full name of the patient.
    pub name: String,
    /// Contact email, used for appointment notifications.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Sex of the patient as free-form text.
    pub sex: String,
    /// When the patient record was created.
    pub created_at: DateTime<Utc>,
    /// When the patient record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// Converts the patient domain model to a DTO for API responses.
    pub fn into_dto(self) -> PatientDto {
        PatientDto {
            id: self.id,
            clinic_id: self.clinic_id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            sex: self.sex,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a patient domain model at the repository boundary.
    pub fn from_entity(entity: entity::patient::Model) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            name: entity.name,
            email: entity.email,
            phone_number: entity.phone_number,
            sex: entity.sex,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for registering a patient.
#[derive(Debug, Clone)]
pub struct CreatePatientParam {
    /// Clinic the patient belongs to.
    pub clinic_id: i32,
    /// Full name of the patient.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Sex of the patient.
    pub sex: String,
}

impl CreatePatientParam {
    /// Creates patient parameters from the creation DTO.
    pub fn from_dto(clinic_id: i32, dto: CreatePatientDto) -> Self {
        Self {
            clinic_id,
            name: dto.name,
            email: dto.email,
            phone_number: dto.phone_number,
            sex: dto.sex,
        }
    }
}

/// Parameters for updating a patient's details.
#[derive(Debug, Clone)]
pub struct UpdatePatientParam {
    /// Clinic the patient belongs to.
    pub clinic_id: i32,
    /// Database ID of the patient to update.
    pub patient_id: i32,
    /// New full name.
    pub name: String,
    /// New contact email.
    pub email: String,
    /// New contact phone number.
    pub phone_number: String,
    /// New sex value.
    pub sex: String,
}

impl UpdatePatientParam {
    /// Creates update parameters from the update DTO.
    pub fn from_dto(clinic_id: i32, patient_id: i32, dto: UpdatePatientDto) -> Self {
        Self {
            clinic_id,
            patient_id,
            name: dto.name,
            email: dto.email,
            phone_number: dto.phone_number,
            sex: dto.sex,
        }
    }
}

/// Parameters for paginated patient queries with optional name search.
#[derive(Debug, Clone)]
pub struct GetPatientsParam {
    /// Clinic whose patients to list.
    pub clinic_id: i32,
    /// Case-insensitive name filter, None lists everyone.
    pub search: Option<String>,
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of patients to return per page.
    pub per_page: u64,
}

/// Paginated collection of patients with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPatients {
    /// Patients for this page.
    pub patients: Vec<Patient>,
    /// Total number of matching patients across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of patients per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedPatients {
    /// Converts the paginated patients domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedPatientsDto {
        PaginatedPatientsDto {
            patients: self.patients.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
