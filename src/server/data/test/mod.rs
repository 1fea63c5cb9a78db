mod appointment;
mod clinic;
mod doctor;
mod insurance_plan;
mod medical_record;
mod patient;
mod payment;
mod security_log;
mod user;
