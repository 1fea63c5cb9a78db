//! Medical record domain models and parameters.
//!
//! Records hold free-form markdown written by clinic staff. A record may be
//! attached to the appointment it was written during; deleting that appointment
//! detaches the record rather than destroying it.

use chrono::{DateTime, Utc};

use crate::model::medical_record::{
    CreateMedicalRecordDto, MedicalRecordDto, UpdateMedicalRecordDto,
};

/// A markdown note in a patient's history.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicalRecord {
    /// Database ID of the record.
    pub id: i32,
    /// Clinic the record belongs to.
    pub clinic_id: i32,
    /// Patient the record is about.
    pub patient_id: i32,
    /// Appointment the record was written during, if any.
    pub appointment_id: Option<i32>,
    /// Markdown content of the record.
    pub content: String,
    /// When the record was written.
    pub created_at: DateTime<Utc>,
    /// When the record was last edited.
    pub updated_at: DateTime<Utc>,
}

impl MedicalRecord {
    /// Converts the record domain model to a DTO for API responses.
    pub fn into_dto(self) -> MedicalRecordDto {
        MedicalRecordDto {
            id: self.id,
            patient_id: self.patient_id,
            appointment_id: self.appointment_id,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a record domain model at the repository boundary.
    pub fn from_entity(entity: entity::medical_record::Model) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            patient_id: entity.patient_id,
            appointment_id: entity.appointment_id,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for writing a medical record.
#[derive(Debug, Clone)]
pub struct CreateMedicalRecordParam {
    /// Clinic the record belongs to.
    pub clinic_id: i32,
    /// Patient the record is about.
    pub patient_id: i32,
    /// Appointment the record is attached to, if any.
    pub appointment_id: Option<i32>,
    /// Markdown content.
    pub content: String,
}

impl CreateMedicalRecordParam {
    /// Creates record parameters from the creation DTO.
    pub fn from_dto(clinic_id: i32, patient_id: i32, dto: CreateMedicalRecordDto) -> Self {
        Self {
            clinic_id,
            patient_id,
            appointment_id: dto.appointment_id,
            content: dto.content,
        }
    }
}

/// Parameters for editing a medical record's content.
#[derive(Debug, Clone)]
pub struct UpdateMedicalRecordParam {
    /// Clinic the record belongs to.
    pub clinic_id: i32,
    /// Database ID of the record to edit.
    pub record_id: i32,
    /// New markdown content.
    pub content: String,
}

impl UpdateMedicalRecordParam {
    /// Creates edit parameters from the update DTO.
    pub fn from_dto(clinic_id: i32, record_id: i32, dto: UpdateMedicalRecordDto) -> Self {
        Self {
            clinic_id,
            record_id,
            content: dto.content,
        }
    }
}
