pub mod api;
pub mod appointment;
pub mod clinic;
pub mod doctor;
pub mod insurance;
pub mod medical_record;
pub mod patient;
pub mod payment;
pub mod report;
pub mod security_log;
pub mod user;
