//! Health insurance plan domain models and parameters.

use crate::model::insurance::{
    CreateHealthInsurancePlanDto, HealthInsurancePlanDto, UpdateHealthInsurancePlanDto,
};

/// Health insurance plan accepted by a clinic.
///
/// When an appointment is booked under a plan, the plan's base price replaces
/// the doctor's default appointment price.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthInsurancePlan {
    /// Database ID of the plan.
    pub id: i32,
    /// Clinic that accepts the plan.
    pub clinic_id: i32,
    /// Display name of the plan.
    pub name: String,
    /// Price charged per appointment under this plan, in cents.
    pub base_price_cents: i32,
}

impl HealthInsurancePlan {
    /// Converts the plan domain model to a DTO for API responses.
    pub fn into_dto(self) -> HealthInsurancePlanDto {
        HealthInsurancePlanDto {
            id: self.id,
            clinic_id: self.clinic_id,
            name: self.name,
            base_price_cents: self.base_price_cents,
        }
    }

    /// Converts an entity model to a plan domain model at the repository boundary.
    pub fn from_entity(entity: entity::health_insurance_plan::Model) -> Self {
        Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            name: entity.name,
            base_price_cents: entity.base_price_cents,
        }
    }
}

/// Parameters for creating a health insurance plan.
#[derive(Debug, Clone)]
pub struct CreateHealthInsurancePlanParam {
    /// Clinic that accepts the plan.
    pub clinic_id: i32,
    /// Display name of the plan.
    pub name: String,
    /// Price charged per appointment under this plan, in cents.
    pub base_price_cents: i32,
}

impl CreateHealthInsurancePlanParam {
    /// Creates plan parameters from the creation DTO.
    pub fn from_dto(clinic_id: i32, dto: CreateHealthInsurancePlanDto) -> Self {
        Self {
            clinic_id,
            name: dto.name,
            base_price_cents: dto.base_price_cents,
        }
    }
}

/// Parameters for updating a health insurance plan.
#[derive(Debug, Clone)]
pub struct UpdateHealthInsurancePlanParam {
    /// Clinic that accepts the plan.
    pub clinic_id: i32,
    /// Database ID of the plan to update.
    pub plan_id: i32,
    /// New display name.
    pub name: String,
    /// New per-appointment price in cents.
    pub base_price_cents: i32,
}

impl UpdateHealthInsurancePlanParam {
    /// Creates update parameters from the update DTO.
    pub fn from_dto(clinic_id: i32, plan_id: i32, dto: UpdateHealthInsurancePlanDto) -> Self {
        Self {
            clinic_id,
            plan_id,
            name: dto.name,
            base_price_cents: dto.base_price_cents,
        }
    }
}
