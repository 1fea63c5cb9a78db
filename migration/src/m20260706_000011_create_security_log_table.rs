use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SecurityLog::Table)
                    .if_not_exists()
                    .col(pk_auto(SecurityLog::Id))
                    .col(integer_null(SecurityLog::ClinicId))
                    .col(integer_null(SecurityLog::UserId))
                    .col(string(SecurityLog::Action))
                    .col(string(SecurityLog::Entity))
                    .col(integer_null(SecurityLog::EntityId))
                    .col(boolean(SecurityLog::Success))
                    .col(string_null(SecurityLog::Detail))
                    .col(
                        timestamp(SecurityLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SecurityLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SecurityLog {
    Table,
    Id,
    ClinicId,
    UserId,
    Action,
    Entity,
    EntityId,
    Success,
    Detail,
    CreatedAt,
}
