//! HTTP request handlers for the REST API.
//!
//! Each submodule owns the handlers for one resource: access control via
//! [`crate::server::middleware::auth::AuthGuard`], DTO conversion at the
//! boundary, and delegation to the matching service. Handlers never contain
//! business logic themselves.

pub mod appointment;
pub mod auth;
pub mod clinic;
pub mod doctor;
pub mod insurance_plan;
pub mod medical_record;
pub mod patient;
pub mod payment;
pub mod report;
pub mod security_log;
pub mod user;
