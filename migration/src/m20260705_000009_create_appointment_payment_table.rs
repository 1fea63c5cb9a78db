use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000001_create_clinic_table::Clinic;
use super::m20260703_000007_create_appointment_table::Appointment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(AppointmentPayment::Id))
                    .col(integer(AppointmentPayment::ClinicId))
                    .col(integer_uniq(AppointmentPayment::AppointmentId))
                    .col(integer(AppointmentPayment::TotalCents))
                    .col(integer(AppointmentPayment::PaidCents).default(0))
                    .col(integer(AppointmentPayment::ChangeCents).default(0))
                    .col(string(AppointmentPayment::Status))
                    .col(
                        timestamp(AppointmentPayment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(AppointmentPayment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_payment_clinic_id")
                            .from(AppointmentPayment::Table, AppointmentPayment::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_payment_appointment_id")
                            .from(AppointmentPayment::Table, AppointmentPayment::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppointmentPayment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppointmentPayment {
    Table,
    Id,
    ClinicId,
    AppointmentId,
    TotalCents,
    PaidCents,
    ChangeCents,
    Status,
    CreatedAt,
    UpdatedAt,
}
