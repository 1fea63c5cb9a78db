use crate::server::{
    data::patient::PatientRepository,
    model::patient::{CreatePatientParam, GetPatientsParam, UpdatePatientParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod update;
