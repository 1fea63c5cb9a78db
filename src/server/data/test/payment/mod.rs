use crate::server::{
    data::payment::PaymentRepository,
    model::payment::{PaymentMethod, PaymentStatus},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_transaction;
mod delete_transaction;
mod get_by_appointment;
mod get_by_appointment_ids;
mod get_clinic_transactions_in_range;
mod open_for_appointment;
mod update_aggregate;
