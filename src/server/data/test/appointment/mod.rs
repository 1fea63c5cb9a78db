use crate::server::{
    data::{appointment::AppointmentRepository, payment::PaymentRepository},
    model::{appointment::GetAppointmentsParam, payment::PaymentStatus},
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_in_range;
mod get_booked_times;
mod get_by_id;
mod get_due_for_reminder;
mod get_paginated;
mod get_rows_by_ids;
mod update;
