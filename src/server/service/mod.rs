//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Side Effects**: Sending transactional email and writing audit rows without
//!   letting either abort the primary operation

pub mod appointment;
pub mod auth;
pub mod availability;
pub mod clinic;
pub mod doctor;
pub mod export;
pub mod insurance_plan;
pub mod mail;
pub mod medical_record;
pub mod patient;
pub mod payment;
pub mod report;
pub mod security_log;
pub mod setup_code;
pub mod user;
