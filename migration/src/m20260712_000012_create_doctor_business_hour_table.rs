use sea_orm_migration::{prelude::*, schema::*};

use super::m20260702_000004_create_doctor_table::Doctor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DoctorBusinessHour::Table)
                    .if_not_exists()
                    .col(pk_auto(DoctorBusinessHour::Id))
                    .col(integer(DoctorBusinessHour::DoctorId))
                    .col(integer(DoctorBusinessHour::Weekday))
                    .col(boolean(DoctorBusinessHour::Enabled).default(false))
                    .col(string_null(DoctorBusinessHour::StartTime))
                    .col(string_null(DoctorBusinessHour::EndTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doctor_business_hour_doctor_id")
                            .from(DoctorBusinessHour::Table, DoctorBusinessHour::DoctorId)
                            .to(Doctor::Table, Doctor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_doctor_weekday_unique")
                            .col(DoctorBusinessHour::DoctorId)
                            .col(DoctorBusinessHour::Weekday),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoctorBusinessHour::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DoctorBusinessHour {
    Table,
    Id,
    DoctorId,
    Weekday,
    Enabled,
    StartTime,
    EndTime,
}
