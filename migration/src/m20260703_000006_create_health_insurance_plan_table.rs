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
                    .table(HealthInsurancePlan::Table)
                    .if_not_exists()
                    .col(pk_auto(HealthInsurancePlan::Id))
                    .col(integer(HealthInsurancePlan::ClinicId))
                    .col(string(HealthInsurancePlan::Name))
                    .col(integer(HealthInsurancePlan::BasePriceCents))
                    .col(
                        timestamp(HealthInsurancePlan::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(HealthInsurancePlan::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_health_insurance_plan_clinic_id")
                            .from(HealthInsurancePlan::Table, HealthInsurancePlan::ClinicId)
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
            .drop_table(Table::drop().table(HealthInsurancePlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HealthInsurancePlan {
    Table,
    Id,
    ClinicId,
    Name,
    BasePriceCents,
    CreatedAt,
    UpdatedAt,
}
