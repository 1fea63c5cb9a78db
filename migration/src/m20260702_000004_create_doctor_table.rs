use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000001_create_clinic_table::Clinic;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doctor::Table)
                    .if_not_exists()
                    .col(pk_auto(Doctor::Id))
                    .col(integer(Doctor::ClinicId))
                    .col(string(Doctor::Name))
                    .col(string(Doctor::Specialty))
                    .col(integer(Doctor::AppointmentPriceCents))
                    .col(integer_null(Doctor::AvailableFromWeekday))
                    .col(integer_null(Doctor::AvailableToWeekday))
                    .col(string_null(Doctor::AvailableFromTime))
                    .col(string_null(Doctor::AvailableToTime))
                    .col(
                        timestamp(Doctor::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Doctor::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doctor_clinic_id")
                            .from(Doctor::Table, Doctor::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Doctor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Doctor {
    Table,
    Id,
    ClinicId,
    Name,
    Specialty,
    AppointmentPriceCents,
    AvailableFromWeekday,
    AvailableToWeekday,
    AvailableFromTime,
    AvailableToTime,
    CreatedAt,
    UpdatedAt,
}
