use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HealthInsurancePlanDto {
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    pub base_price_cents: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateHealthInsurancePlanDto {
    pub name: String,
    pub base_price_cents: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateHealthInsurancePlanDto {
    pub name: String,
    pub base_price_cents: i32,
}
