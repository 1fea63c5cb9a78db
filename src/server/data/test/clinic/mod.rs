use crate::server::{
    data::clinic::{ClinicRepository, UserClinicRepository},
    model::clinic::{CreateClinicParam, UpdateClinicParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_member;
mod create;
mod get_clinics_for_user;
mod get_members;
mod update;
