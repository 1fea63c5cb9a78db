use crate::server::{
    data::security_log::SecurityLogRepository,
    model::security_log::{GetSecurityLogsParam, RecordSecurityLogParam},
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod insert;
