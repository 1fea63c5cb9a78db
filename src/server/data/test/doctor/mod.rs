use crate::server::{
    data::doctor::DoctorRepository,
    model::doctor::{BusinessHour, CreateDoctorParam, GetDoctorsParam, UpdateDoctorParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod replace_business_hours;
mod update;
