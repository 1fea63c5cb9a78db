//! Clinic domain models and parameters.
//!
//! Provides domain models for clinics, the tenancy boundary of the application.
//! Every doctor, patient, appointment, and report belongs to exactly one clinic,
//! and users gain access to clinic data through memberships.

use chrono::{DateTime, Utc};

use crate::model::clinic::{ClinicDto, ClinicMemberDto};

/// A clinic with its display name and creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Clinic {
    /// Database ID of the clinic.
    pub id: i32,
    /// Display name of the clinic.
    pub name: String,
    /// When the clinic was created.
    pub created_at: DateTime<Utc>,
}

impl Clinic {
    /// Converts the clinic domain model to a DTO for API responses.
    pub fn into_dto(self) -> ClinicDto {
        ClinicDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a clinic domain model at the repository boundary.
    pub fn from_entity(entity: entity::clinic::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

/// A user's membership in a clinic, enriched with their account details.
///
/// Built by joining membership rows against the user table so the settings
/// screen can list members by name and email.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicMember {
    /// Database ID of the member's user account.
    pub user_id: i32,
    /// Display name of the member.
    pub name: String,
    /// Login email of the member.
    pub email: String,
}

impl ClinicMember {
    /// Converts the member domain model to a DTO for API responses.
    pub fn into_dto(self) -> ClinicMemberDto {
        ClinicMemberDto {
            user_id: self.user_id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Parameters for creating a clinic.
#[derive(Debug, Clone)]
pub struct CreateClinicParam {
    /// Display name of the new clinic.
    pub name: String,
}

/// Parameters for renaming a clinic.
#[derive(Debug, Clone)]
pub struct UpdateClinicParam {
    /// Database ID of the clinic to rename.
    pub clinic_id: i32,
    /// New display name.
    pub name: String,
}

/// Parameters for granting a user membership in a clinic.
///
/// The user is looked up by email so admins can add members without knowing
/// database IDs.
#[derive(Debug, Clone)]
pub struct AddClinicMemberParam {
    /// Database ID of the clinic.
    pub clinic_id: i32,
    /// Login email of the user to add.
    pub email: String,
}
