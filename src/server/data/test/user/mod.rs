use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod any_exists;
mod create;
mod get_all_paginated;
mod get_by_email;
