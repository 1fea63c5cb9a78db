use crate::server::{
    data::insurance_plan::HealthInsurancePlanRepository,
    model::insurance::{CreateHealthInsurancePlanParam, UpdateHealthInsurancePlanParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
