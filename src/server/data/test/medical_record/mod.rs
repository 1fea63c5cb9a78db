use crate::server::{
    data::medical_record::MedicalRecordRepository,
    model::medical_record::{CreateMedicalRecordParam, UpdateMedicalRecordParam},
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_by_patient;
mod update;
