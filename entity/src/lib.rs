pub mod prelude;

pub mod appointment;
pub mod appointment_payment;
pub mod clinic;
pub mod doctor;
pub mod doctor_business_hour;
pub mod health_insurance_plan;
pub mod medical_record;
pub mod patient;
pub mod payment_transaction;
pub mod security_log;
pub mod user;
pub mod user_clinic;
