use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000001_create_clinic_table::Clinic;
use super::m20260702_000005_create_patient_table::Patient;
use super::m20260703_000007_create_appointment_table::Appointment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicalRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(MedicalRecord::Id))
                    .col(integer(MedicalRecord::ClinicId))
                    .col(integer(MedicalRecord::PatientId))
                    .col(integer_null(MedicalRecord::AppointmentId))
                    .col(text(MedicalRecord::Content))
                    .col(
                        timestamp(MedicalRecord::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(MedicalRecord::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medical_record_clinic_id")
                            .from(MedicalRecord::Table, MedicalRecord::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medical_record_patient_id")
                            .from(MedicalRecord::Table, MedicalRecord::PatientId)
                            .to(Patient::Table, Patient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medical_record_appointment_id")
                            .from(MedicalRecord::Table, MedicalRecord::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicalRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MedicalRecord {
    Table,
    Id,
    ClinicId,
    PatientId,
    AppointmentId,
    Content,
    CreatedAt,
    UpdatedAt,
}
