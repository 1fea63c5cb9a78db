#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod appointment;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod clinic;

#[cfg(feature = "web")]
pub mod doctor;

#[cfg(feature = "web")]
pub mod insurance_plan;

#[cfg(feature = "web")]
pub mod medical_record;

#[cfg(feature = "web")]
pub mod patient;

#[cfg(feature = "web")]
pub mod payment;

#[cfg(feature = "web")]
pub mod report;

#[cfg(feature = "web")]
pub mod security_log;

#[cfg(feature = "web")]
pub mod user;
