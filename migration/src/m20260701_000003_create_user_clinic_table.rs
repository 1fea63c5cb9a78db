use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000001_create_clinic_table::Clinic;
use super::m20260701_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserClinic::Table)
                    .if_not_exists()
                    .col(pk_auto(UserClinic::Id))
                    .col(integer(UserClinic::UserId))
                    .col(integer(UserClinic::ClinicId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_clinic_user_id")
                            .from(UserClinic::Table, UserClinic::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_clinic_clinic_id")
                            .from(UserClinic::Table, UserClinic::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_clinic_unique")
                            .col(UserClinic::UserId)
                            .col(UserClinic::ClinicId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserClinic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserClinic {
    Table,
    Id,
    UserId,
    ClinicId,
}
