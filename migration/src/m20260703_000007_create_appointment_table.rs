use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000001_create_clinic_table::Clinic;
use super::m20260702_000004_create_doctor_table::Doctor;
use super::m20260702_000005_create_patient_table::Patient;
use super::m20260703_000006_create_health_insurance_plan_table::HealthInsurancePlan;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::ClinicId))
                    .col(integer(Appointment::PatientId))
                    .col(integer(Appointment::DoctorId))
                    .col(integer_null(Appointment::HealthInsurancePlanId))
                    .col(timestamp(Appointment::Date))
                    .col(integer(Appointment::PriceCents))
                    .col(timestamp_null(Appointment::ReminderSentAt))
                    .col(
                        timestamp(Appointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Appointment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_clinic_id")
                            .from(Appointment::Table, Appointment::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_patient_id")
                            .from(Appointment::Table, Appointment::PatientId)
                            .to(Patient::Table, Patient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_doctor_id")
                            .from(Appointment::Table, Appointment::DoctorId)
                            .to(Doctor::Table, Doctor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_health_insurance_plan_id")
                            .from(Appointment::Table, Appointment::HealthInsurancePlanId)
                            .to(HealthInsurancePlan::Table, HealthInsurancePlan::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    ClinicId,
    PatientId,
    DoctorId,
    HealthInsurancePlanId,
    Date,
    PriceCents,
    ReminderSentAt,
    CreatedAt,
    UpdatedAt,
}
