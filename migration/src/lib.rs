pub use sea_orm_migration::prelude::*;

mod m20260701_000001_create_clinic_table;
mod m20260701_000002_create_user_table;
mod m20260701_000003_create_user_clinic_table;
mod m20260702_000004_create_doctor_table;
mod m20260702_000005_create_patient_table;
mod m20260703_000006_create_health_insurance_plan_table;
mod m20260703_000007_create_appointment_table;
mod m20260704_000008_create_medical_record_table;
mod m20260705_000009_create_appointment_payment_table;
mod m20260705_000010_create_payment_transaction_table;
mod m20260706_000011_create_security_log_table;
mod m20260712_000012_create_doctor_business_hour_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260701_000001_create_clinic_table::Migration),
            Box::new(m20260701_000002_create_user_table::Migration),
            Box::new(m20260701_000003_create_user_clinic_table::Migration),
            Box::new(m20260702_000004_create_doctor_table::Migration),
            Box::new(m20260702_000005_create_patient_table::Migration),
            Box::new(m20260703_000006_create_health_insurance_plan_table::Migration),
            Box::new(m20260703_000007_create_appointment_table::Migration),
            Box::new(m20260704_000008_create_medical_record_table::Migration),
            Box::new(m20260705_000009_create_appointment_payment_table::Migration),
            Box::new(m20260705_000010_create_payment_transaction_table::Migration),
            Box::new(m20260706_000011_create_security_log_table::Migration),
            Box::new(m20260712_000012_create_doctor_business_hour_table::Migration),
        ]
    }
}
